//! Filled Orders Bounded Context
//!
//! Immutable filled-order records, their grouping categories, and the
//! repository trait the stats worker reads them through.

pub mod errors;
pub mod filled_order;
pub mod order_kind;
pub mod order_side;
pub mod repository;

pub use errors::RepositoryError;
pub use filled_order::{FilledOrder, OrderFilter};
pub use order_kind::{OrderCategory, OrderKind};
pub use order_side::OrderSide;
pub use repository::FilledOrderRepository;
