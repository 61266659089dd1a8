//! Service node adapter: represents an upstream service as a pipeline
//! node.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::pipeline::{
    domain::{InputKeySet, ServiceDefinition, ServiceEnvelope, ServiceOrigin},
    ports::{
        InvalidHandleError, NodeInputs, NodeOutputs, NodeRunResult, PipelineNode, ServiceHandle,
    },
};

/// Output key under which a service node publishes its envelope.
pub const SERVICE_OUTPUT_KEY: &str = "service_output";

/// Pipeline node standing in for an upstream service.
///
/// The node performs no computation of its own: invoking it produces a
/// single [`SERVICE_OUTPUT_KEY`] entry holding the JSON-encoded
/// [`ServiceEnvelope`], which identifies the service and echoes the
/// inputs so the surrounding runtime can route the call. Instances are
/// immutable once constructed and hold no state between invocations, so
/// they may be invoked concurrently without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNode {
    name: String,
    description: String,
    input_keys: InputKeySet,
    origin: ServiceOrigin,
}

impl ServiceNode {
    /// Creates a node with the default input key set and an agent origin.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_keys: InputKeySet::default(),
            origin: ServiceOrigin::default(),
        }
    }

    /// Replaces the declared input key set.
    #[must_use]
    pub fn with_input_keys(mut self, input_keys: InputKeySet) -> Self {
        self.input_keys = input_keys;
        self
    }

    /// Records the kind of service this node stands in for.
    #[must_use]
    pub const fn with_origin(mut self, origin: ServiceOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Creates a node from a service descriptor.
    ///
    /// Name and description are copied from the descriptor; input keys
    /// and origin keep their defaults and can be refined with
    /// [`ServiceNode::with_input_keys`] and [`ServiceNode::with_origin`].
    #[must_use]
    pub fn from_definition(definition: &ServiceDefinition) -> Self {
        Self::new(definition.service_name(), definition.description())
    }

    /// Creates a node from a component-backed service handle.
    ///
    /// The handle is narrowed to the component-service capability; on
    /// success the node copies the embedded descriptor, adopts the
    /// embedded component's declared input keys, and records a component
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHandleError`] when the handle does not expose the
    /// component-service capability.
    pub fn from_component_service(
        handle: &dyn ServiceHandle,
    ) -> Result<Self, InvalidHandleError> {
        let service = handle.as_component_service().ok_or(InvalidHandleError)?;
        Ok(Self::from_definition(service.service_definition())
            .with_input_keys(service.component().input_keys())
            .with_origin(ServiceOrigin::Component))
    }

    /// Returns the service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the service description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the declared input key set.
    #[must_use]
    pub const fn input_keys(&self) -> &InputKeySet {
        &self.input_keys
    }

    /// Returns the kind of service this node stands in for.
    #[must_use]
    pub const fn origin(&self) -> ServiceOrigin {
        self.origin
    }

    /// Encodes the invocation envelope under [`SERVICE_OUTPUT_KEY`].
    ///
    /// Inputs are echoed as received; keys outside the declared set are
    /// accepted rather than rejected, since the actual validation happens
    /// in the service runtime the envelope is routed to.
    fn render(&self, inputs: NodeInputs) -> NodeRunResult {
        let envelope = ServiceEnvelope::new(self.name.clone(), self.description.clone(), inputs);
        let encoded = envelope.to_json()?;
        let mut outputs = NodeOutputs::new();
        outputs.insert(SERVICE_OUTPUT_KEY.to_owned(), Value::String(encoded));
        Ok(outputs)
    }
}

#[async_trait]
impl PipelineNode for ServiceNode {
    fn declared_input_keys(&self) -> BTreeSet<String> {
        self.input_keys.as_set().clone()
    }

    fn declared_output_keys(&self) -> BTreeSet<String> {
        BTreeSet::from([SERVICE_OUTPUT_KEY.to_owned()])
    }

    fn run(&self, inputs: NodeInputs) -> NodeRunResult {
        self.render(inputs)
    }

    async fn run_async(&self, inputs: NodeInputs) -> NodeRunResult {
        self.render(inputs)
    }
}
