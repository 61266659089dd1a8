//! Service handle ports: capabilities upstream services expose to the
//! orchestrator.

use crate::pipeline::domain::{InputKeySet, ServiceDefinition};
use thiserror::Error;

/// Opaque handle to an upstream service known to the orchestrator.
pub trait ServiceHandle: Send + Sync {
    /// Returns the descriptor the service advertises.
    fn service_definition(&self) -> &ServiceDefinition;

    /// Narrows this handle to the component-service capability.
    ///
    /// Returns `None` when the service is not backed by a pipeline
    /// component, which is the default for agent-backed services.
    fn as_component_service(&self) -> Option<&dyn ComponentServiceHandle> {
        None
    }
}

/// Capability of services backed by an embedded pipeline component.
pub trait ComponentServiceHandle: ServiceHandle {
    /// Returns the component embedded in the service.
    fn component(&self) -> &dyn EmbeddedComponent;
}

/// Pipeline component embedded in a component-backed service.
pub trait EmbeddedComponent: Send + Sync {
    /// Returns the input keys the component declares.
    fn input_keys(&self) -> InputKeySet;
}

/// Error returned when a handle lacks the component-service capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("handle is not a component service")]
pub struct InvalidHandleError;
