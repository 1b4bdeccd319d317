//! Order statistics computation.
//!
//! Three pure stages: group-and-summarize by type, rank by side,
//! render. The periodic worker wires them to the repository.

pub mod aggregator;
pub mod ranking;
pub mod report;

pub use aggregator::{TypeSummary, summarize_by_type};
pub use ranking::{RankedOrder, SideSelection, top_by_quantity};
pub use report::render_report;
