//! # ConfRTC Stats
//!
//! Per-connection statistics snapshots for the ConfRTC client SDK.
//! The media engine assembles one [`ConnectionStats`] per stats poll;
//! application code reads the contained per-stream reports for display
//! and logging. Every type here is an immutable-after-construction
//! value: a new poll produces new instances instead of updating old
//! ones, so a handed-off snapshot can be read from any number of
//! threads without synchronization.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod adapt;
pub mod connection;
pub mod error;
pub mod logging;
pub mod reports;

// Re-export main types
pub use adapt::AdaptReasons;
pub use connection::{ConnectionStats, ConnectionStatsBuilder, VideoBandwidthStats};
pub use error::{StatsError, StatsResult};
pub use logging::{init_logging, log_snapshot};
pub use reports::{
    AudioReceiverReport, AudioSenderReport, VideoReceiverReport, VideoSenderReport,
};
