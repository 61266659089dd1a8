//! Trestle: pipeline bridging for heterogeneous agent services.
//!
//! This crate lets agent-backed and component-backed services be
//! represented uniformly as nodes inside a pipeline-orchestration graph.
//! The orchestration engine, the agent runtime, and the component runtime
//! remain external collaborators reached only through the trait seams
//! defined here.
//!
//! # Architecture
//!
//! Trestle follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations bridging services into ports
//!
//! # Modules
//!
//! - [`pipeline`]: Service descriptors, node capability traits, and the
//!   service node adapter

pub mod pipeline;
