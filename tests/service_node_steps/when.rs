//! When steps for service node BDD scenarios.

use super::world::{ServiceNodeWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::Value;
use trestle::pipeline::{
    adapters::ServiceNode,
    domain::DEFAULT_INPUT_KEY,
    ports::{NodeInputs, PipelineNode, ServiceHandle},
};

#[when(r#"the node is invoked with input "{value}""#)]
fn invoke_node(world: &mut ServiceNodeWorld, value: String) -> Result<(), eyre::Report> {
    let node = world
        .node
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no node in scenario world"))?;

    let mut inputs = NodeInputs::new();
    inputs.insert(DEFAULT_INPUT_KEY.to_owned(), Value::String(value));

    let blocking = node
        .run(inputs.clone())
        .map_err(|err| eyre::eyre!("blocking invocation failed: {err}"))?;
    let suspending = run_async(node.run_async(inputs))
        .map_err(|err| eyre::eyre!("suspending invocation failed: {err}"))?;

    world.last_outputs = Some(blocking);
    world.last_async_outputs = Some(suspending);
    Ok(())
}

#[when("a node is created from the component service handle")]
fn create_node_from_component_handle(world: &mut ServiceNodeWorld) -> Result<(), eyre::Report> {
    let handle = world
        .component_handle
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no component handle in scenario world"))?;
    world.last_conversion = Some(ServiceNode::from_component_service(handle));
    Ok(())
}

#[when("a component node is requested from the handle")]
fn request_component_node_from_agent_handle(
    world: &mut ServiceNodeWorld,
) -> Result<(), eyre::Report> {
    let handle: &dyn ServiceHandle = world
        .agent_handle
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no agent handle in scenario world"))?;
    world.last_conversion = Some(ServiceNode::from_component_service(handle));
    Ok(())
}
