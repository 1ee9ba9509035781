//! Per-stream send and receive reports for one polling interval
//!
//! The engine constructs a fresh report per active stream on every
//! poll; values are read back exactly as constructed, with no clamping
//! or transformation. The engine is the trust boundary.

use confrtc_media::Resolution;
use serde::{Deserialize, Serialize};

use crate::adapt::AdaptReasons;

/// Outbound audio metrics for one polling interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSenderReport {
    /// Audio bytes sent
    pub bytes_sent: u64,
    /// Audio packets sent
    pub packets_sent: u32,
    /// Audio packets lost during sending; negative when the remote end
    /// reported more duplicates than losses
    pub packets_lost: i32,
    /// Round-trip time for audio sending in milliseconds
    pub round_trip_time_ms: u64,
    /// Audio codec name for sending
    pub codec_name: String,
}

/// Inbound audio metrics for one polling interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioReceiverReport {
    /// Audio bytes received
    pub bytes_received: u64,
    /// Audio packets received
    pub packets_received: u32,
    /// Audio packets lost during receiving
    pub packets_lost: i32,
    /// Estimated audio delay in milliseconds
    pub estimated_delay_ms: u32,
    /// Audio codec name for receiving
    pub codec_name: String,
}

/// Outbound video metrics for one polling interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSenderReport {
    /// Video bytes sent
    pub bytes_sent: u64,
    /// Video packets sent
    pub packets_sent: u32,
    /// Video packets lost during sending
    pub packets_lost: i32,
    /// Number of FIR received from the remote end
    pub fir_count: u32,
    /// Number of PLI received from the remote end
    pub pli_count: u32,
    /// Number of NACK received from the remote end
    pub nack_count: u32,
    /// Video frame resolution sent
    pub resolution_sent: Resolution,
    /// Video framerate sent
    pub framerate_sent: u32,
    /// Why the sender last adapted outgoing quality
    pub last_adapt_reason: AdaptReasons,
    /// Number of quality adaptation changes so far
    pub adapt_changes: u32,
    /// Round-trip time for video sending in milliseconds
    pub round_trip_time_ms: u64,
    /// Video codec name for sending
    pub codec_name: String,
}

/// Inbound video metrics for one polling interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReceiverReport {
    /// Video bytes received
    pub bytes_received: u64,
    /// Video packets received
    pub packets_received: u32,
    /// Video packets lost during receiving
    pub packets_lost: i32,
    /// Number of FIR sent to the remote end
    pub fir_count: u32,
    /// Number of PLI sent to the remote end
    pub pli_count: u32,
    /// Number of NACK sent to the remote end
    pub nack_count: u32,
    /// Video frame resolution received
    pub resolution_received: Resolution,
    /// Video framerate received off the wire
    pub framerate_received: u32,
    /// Video framerate delivered to the renderer
    pub framerate_output: u32,
    /// Current video delay in milliseconds
    pub delay_ms: u32,
    /// Video codec name for receiving
    pub codec_name: String,
}
