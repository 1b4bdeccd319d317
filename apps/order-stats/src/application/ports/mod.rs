//! Application Ports
//!
//! Interfaces for external collaborators, implemented by
//! infrastructure adapters.

/// Destination for rendered reports.
///
/// The worker hands one report string to the sink per successful
/// cycle. Implementations must not block: the production sink logs,
/// test sinks collect.
pub trait ReportSink: Send + Sync {
    /// Publish one report.
    fn publish(&self, report: &str);
}
