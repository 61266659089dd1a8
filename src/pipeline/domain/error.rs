//! Error types for pipeline domain parsing.

use thiserror::Error;

/// Error returned while parsing a service origin tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown service origin: {0}")]
pub struct ParseServiceOriginError(pub String);
