//! Adapter implementations bridging upstream services into pipeline
//! ports.

mod service_node;

pub use service_node::{SERVICE_OUTPUT_KEY, ServiceNode};
