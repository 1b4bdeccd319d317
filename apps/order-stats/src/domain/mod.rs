//! Domain Layer
//!
//! The innermost layer: immutable domain types and the repository
//! trait, with zero infrastructure dependencies.

pub mod orders;
