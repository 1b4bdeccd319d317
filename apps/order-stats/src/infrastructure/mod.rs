//! Infrastructure Layer
//!
//! Adapters implementing the domain and application ports: repository
//! backends and report sinks.

pub mod persistence;
pub mod publish;
