//! Error types for the stats layer
//!
//! Snapshot construction itself cannot fail; the only fallible
//! operation here is installing the logging subscriber.

use thiserror::Error;

/// Main error type for stats operations
#[derive(Error, Debug)]
pub enum StatsError {
    /// Logging initialization failed
    #[error("Logging initialization failed: {reason}")]
    LoggingInit {
        /// Reason initialization failed
        reason: String,
    },
}

/// Result type alias for stats operations
pub type StatsResult<T> = Result<T, StatsError>;
