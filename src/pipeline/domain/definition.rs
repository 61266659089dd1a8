//! Service descriptor advertised by upstream services.

use serde::{Deserialize, Serialize};

/// Descriptor an upstream service advertises to the orchestrator.
///
/// Remotely launched services may also advertise the network location
/// they listen on; both fields are optional and never appear in node
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    service_name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

impl ServiceDefinition {
    /// Creates a descriptor with the two required fields.
    ///
    /// `host` and `port` default to `None`.
    #[must_use]
    pub fn new(service_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            description: description.into(),
            host: None,
            port: None,
        }
    }

    /// Sets the host the service listens on.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port the service listens on.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Returns the service name.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the human-readable service description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the advertised host, if declared.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the advertised port, if declared.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }
}
