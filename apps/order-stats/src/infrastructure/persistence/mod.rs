//! Repository adapters.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryFilledOrderRepository;
pub use postgres::PostgresFilledOrderRepository;
