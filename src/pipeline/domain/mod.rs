//! Domain model for pipeline service bridging.
//!
//! The pipeline domain models the descriptor an upstream service
//! advertises, the origin of the service backing a node, the input keys a
//! node declares, and the envelope a node emits when invoked. All
//! infrastructure concerns are kept outside the domain boundary.

mod definition;
mod envelope;
mod error;
mod input_keys;
mod origin;

pub use definition::ServiceDefinition;
pub use envelope::ServiceEnvelope;
pub use error::ParseServiceOriginError;
pub use input_keys::{DEFAULT_INPUT_KEY, InputKeySet};
pub use origin::ServiceOrigin;
