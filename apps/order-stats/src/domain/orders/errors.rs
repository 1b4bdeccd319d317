//! Order repository errors.

use thiserror::Error;

/// Errors raised by the filled-order repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Fetch or connectivity failure.
    #[error("order query failed: {message}")]
    Query {
        /// Error details.
        message: String,
    },

    /// A stored row whose declared type is missing a required field.
    #[error("stored order '{symbol}' is malformed: {reason}")]
    MalformedRecord {
        /// Instrument symbol of the offending row.
        symbol: String,
        /// What was wrong with the row.
        reason: String,
    },

    /// Releasing the repository connection failed.
    ///
    /// Fatal during shutdown: it indicates a leaked external resource.
    #[error("failed to release the order store connection: {message}")]
    Close {
        /// Error details.
        message: String,
    },
}
