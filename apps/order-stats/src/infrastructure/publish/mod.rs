//! Report sink adapters.

use crate::application::ports::ReportSink;

/// Sink that publishes reports to the log at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReportSink;

impl ReportSink for LogReportSink {
    fn publish(&self, report: &str) {
        tracing::info!("{report}");
    }
}
