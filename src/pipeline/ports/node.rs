//! Pipeline node port: the capability an orchestration engine expects of
//! graph nodes.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use thiserror::Error;

/// Ordered keyword inputs passed to a node invocation.
pub type NodeInputs = Map<String, Value>;

/// Ordered keyword outputs returned by a node invocation.
pub type NodeOutputs = Map<String, Value>;

/// Result type for node invocations.
pub type NodeRunResult = Result<NodeOutputs, NodeRunError>;

/// Graph node contract expected by the pipeline-orchestration engine.
///
/// A node declares the input keys it expects from upstream modules and
/// the output keys it produces, and can be executed through a blocking or
/// a suspending entry point. Identical inputs must yield the same logical
/// output from both entry points.
#[async_trait]
pub trait PipelineNode: Send + Sync {
    /// Returns the input key names this node declares.
    fn declared_input_keys(&self) -> BTreeSet<String>;

    /// Returns the output key names this node produces.
    fn declared_output_keys(&self) -> BTreeSet<String>;

    /// Executes the node, blocking until the outputs are available.
    ///
    /// # Errors
    ///
    /// Returns [`NodeRunError::Serialization`] when an output payload
    /// cannot be encoded.
    fn run(&self, inputs: NodeInputs) -> NodeRunResult;

    /// Executes the node from async callers.
    ///
    /// Implementations with no awaited dependency must resolve
    /// immediately and match [`PipelineNode::run`] for identical inputs.
    ///
    /// # Errors
    ///
    /// Returns [`NodeRunError::Serialization`] when an output payload
    /// cannot be encoded.
    async fn run_async(&self, inputs: NodeInputs) -> NodeRunResult;
}

/// Errors returned by node invocations.
#[derive(Debug, Error)]
pub enum NodeRunError {
    /// An output payload could not be encoded as JSON.
    #[error("failed to encode node output: {0}")]
    Serialization(#[from] serde_json::Error),
}
