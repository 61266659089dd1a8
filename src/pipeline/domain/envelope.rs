//! Output envelope emitted by service nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON payload a service node emits for each invocation.
///
/// The envelope identifies the service the node stands in for and echoes
/// the invocation inputs verbatim, so downstream modules can route the
/// call to the actual service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    /// Name of the service the node represents.
    pub name: String,
    /// Human-readable service description.
    pub description: String,
    /// Invocation inputs as received, in caller order.
    pub input: Map<String, Value>,
}

impl ServiceEnvelope {
    /// Creates an envelope for one invocation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input,
        }
    }

    /// Encodes the envelope as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when a payload value cannot be
    /// encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes an envelope from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the text is not a valid
    /// envelope object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
