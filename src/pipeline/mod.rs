//! Pipeline integration for agent and component services.
//!
//! This module bridges upstream services into the node shape a
//! pipeline-orchestration engine expects: declare input keys, declare
//! output keys, execute blocking, execute suspending. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
