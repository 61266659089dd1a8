//! Origin of the service backing a pipeline node.

use super::ParseServiceOriginError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of upstream service a pipeline node stands in for.
///
/// Agent services and component services are stitched into the same node
/// shape; the origin records which kind produced a given node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOrigin {
    /// The node represents an agent-backed service.
    #[default]
    Agent,
    /// The node represents a component-backed service.
    Component,
}

impl ServiceOrigin {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for ServiceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ServiceOrigin {
    type Error = ParseServiceOriginError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "agent" => Ok(Self::Agent),
            "component" => Ok(Self::Component),
            _ => Err(ParseServiceOriginError(value.to_owned())),
        }
    }
}
