//! Given steps for service node BDD scenarios.

use super::world::{FakeAgentService, FakeComponentService, ServiceNodeWorld};
use rstest_bdd_macros::given;
use trestle::pipeline::adapters::ServiceNode;

#[given(r#"a service node named "{name}" described as "{description}""#)]
fn a_service_node(world: &mut ServiceNodeWorld, name: String, description: String) {
    world.node = Some(ServiceNode::new(name, description));
}

#[given(
    r#"a component service "{name}" described as "{description}" declaring inputs "{first}" and "{second}""#
)]
fn a_component_service(
    world: &mut ServiceNodeWorld,
    name: String,
    description: String,
    first: String,
    second: String,
) {
    world.component_handle = Some(FakeComponentService::new(
        &name,
        &description,
        vec![first, second],
    ));
}

#[given(r#"a plain agent service named "{name}""#)]
fn a_plain_agent_service(world: &mut ServiceNodeWorld, name: String) {
    world.agent_handle = Some(FakeAgentService::new(&name));
}
