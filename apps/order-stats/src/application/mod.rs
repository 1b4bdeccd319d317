//! Application Layer
//!
//! Use cases and orchestration: the pure statistics stages, the ports
//! they publish through, and the periodic worker that drives them.

pub mod ports;
pub mod services;
pub mod stats;
