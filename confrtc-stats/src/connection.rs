//! Aggregate per-connection statistics snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reports::{
    AudioReceiverReport, AudioSenderReport, VideoReceiverReport, VideoSenderReport,
};

/// Point-in-time video bandwidth estimate
///
/// Overwritten wholesale on every snapshot; a default value is all
/// zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoBandwidthStats {
    /// Available video bandwidth for sending, in bits per second
    pub available_send_bandwidth_bps: u64,
    /// Available video bandwidth for receiving, in bits per second
    pub available_receive_bandwidth_bps: u64,
    /// Video transmit bitrate, in bits per second
    pub transmit_bitrate_bps: u64,
    /// Video retransmit bitrate, in bits per second
    pub retransmit_bitrate_bps: u64,
}

/// Aggregate snapshot of one connection's statistics at one instant.
///
/// The engine assembles one of these per stats poll. Each report
/// sequence holds one entry per active stream, in the order the engine
/// appended them; under simulcast a direction can hold several entries.
/// The snapshot owns its reports, so handing it to a consumer hands
/// over ownership and nothing else retains a reference. The timestamp
/// marks when the snapshot was assembled, not when the engine sampled
/// the underlying metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStats {
    /// Moment this snapshot was assembled
    pub timestamp: DateTime<Utc>,
    /// Video bandwidth statistics
    pub video_bandwidth: VideoBandwidthStats,
    /// Audio sender reports, one per outbound audio stream
    pub audio_sender_reports: Vec<AudioSenderReport>,
    /// Audio receiver reports, one per inbound audio stream
    pub audio_receiver_reports: Vec<AudioReceiverReport>,
    /// Video sender reports, one per outbound video stream
    pub video_sender_reports: Vec<VideoSenderReport>,
    /// Video receiver reports, one per inbound video stream
    pub video_receiver_reports: Vec<VideoReceiverReport>,
}

impl ConnectionStats {
    /// Create an empty snapshot stamped with the current time
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            video_bandwidth: VideoBandwidthStats::default(),
            audio_sender_reports: Vec::new(),
            audio_receiver_reports: Vec::new(),
            video_sender_reports: Vec::new(),
            video_receiver_reports: Vec::new(),
        }
    }

    /// Create a builder for append-style population
    pub fn builder() -> ConnectionStatsBuilder {
        ConnectionStatsBuilder::new()
    }

    /// Total number of reports across all four sequences
    pub fn report_count(&self) -> usize {
        self.audio_sender_reports.len()
            + self.audio_receiver_reports.len()
            + self.video_sender_reports.len()
            + self.video_receiver_reports.len()
    }
}

impl Default for ConnectionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ConnectionStats`].
///
/// The engine appends one report per active stream while walking its
/// internal statistics, then calls [`build`](Self::build). Population
/// is the only mutation window; the built snapshot is treated as
/// read-only.
#[derive(Debug, Default)]
pub struct ConnectionStatsBuilder {
    video_bandwidth: VideoBandwidthStats,
    audio_sender_reports: Vec<AudioSenderReport>,
    audio_receiver_reports: Vec<AudioReceiverReport>,
    video_sender_reports: Vec<VideoSenderReport>,
    video_receiver_reports: Vec<VideoReceiverReport>,
}

impl ConnectionStatsBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bandwidth estimate for this snapshot
    pub fn video_bandwidth(mut self, stats: VideoBandwidthStats) -> Self {
        self.video_bandwidth = stats;
        self
    }

    /// Append an audio sender report
    pub fn audio_sender(mut self, report: AudioSenderReport) -> Self {
        self.audio_sender_reports.push(report);
        self
    }

    /// Append an audio receiver report
    pub fn audio_receiver(mut self, report: AudioReceiverReport) -> Self {
        self.audio_receiver_reports.push(report);
        self
    }

    /// Append a video sender report
    pub fn video_sender(mut self, report: VideoSenderReport) -> Self {
        self.video_sender_reports.push(report);
        self
    }

    /// Append a video receiver report
    pub fn video_receiver(mut self, report: VideoReceiverReport) -> Self {
        self.video_receiver_reports.push(report);
        self
    }

    /// Stamp the timestamp and assemble the snapshot
    pub fn build(self) -> ConnectionStats {
        let stats = ConnectionStats {
            timestamp: Utc::now(),
            video_bandwidth: self.video_bandwidth,
            audio_sender_reports: self.audio_sender_reports,
            audio_receiver_reports: self.audio_receiver_reports,
            video_sender_reports: self.video_sender_reports,
            video_receiver_reports: self.video_receiver_reports,
        };
        debug!(
            audio_send = stats.audio_sender_reports.len(),
            audio_recv = stats.audio_receiver_reports.len(),
            video_send = stats.video_sender_reports.len(),
            video_recv = stats.video_receiver_reports.len(),
            "Assembled connection stats snapshot"
        );
        stats
    }
}
