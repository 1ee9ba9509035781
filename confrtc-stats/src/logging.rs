//! Structured snapshot logging
//!
//! Mirrors a [`ConnectionStats`] into `tracing` rows, one per stream,
//! for consumers that want logs rather than a UI.

use confrtc_media::resolution_name;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::connection::ConnectionStats;
use crate::error::{StatsError, StatsResult};

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG` for filtering. Fails if a global subscriber is
/// already installed.
pub fn init_logging() -> StatsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| StatsError::LoggingInit {
            reason: e.to_string(),
        })
}

/// Log one snapshot as structured rows, one per report
pub fn log_snapshot(stats: &ConnectionStats) {
    info!(
        timestamp = %stats.timestamp,
        reports = stats.report_count(),
        "connection stats snapshot"
    );
    info!(
        send_bps = stats.video_bandwidth.available_send_bandwidth_bps,
        recv_bps = stats.video_bandwidth.available_receive_bandwidth_bps,
        transmit_bps = stats.video_bandwidth.transmit_bitrate_bps,
        retransmit_bps = stats.video_bandwidth.retransmit_bitrate_bps,
        "video bandwidth"
    );
    for report in &stats.audio_sender_reports {
        info!(
            bytes = report.bytes_sent,
            packets = report.packets_sent,
            lost = report.packets_lost,
            rtt_ms = report.round_trip_time_ms,
            codec = %report.codec_name,
            "audio send"
        );
    }
    for report in &stats.audio_receiver_reports {
        info!(
            bytes = report.bytes_received,
            packets = report.packets_received,
            lost = report.packets_lost,
            delay_ms = report.estimated_delay_ms,
            codec = %report.codec_name,
            "audio recv"
        );
    }
    for report in &stats.video_sender_reports {
        info!(
            bytes = report.bytes_sent,
            packets = report.packets_sent,
            lost = report.packets_lost,
            fir = report.fir_count,
            pli = report.pli_count,
            nack = report.nack_count,
            resolution = %resolution_name(report.resolution_sent),
            framerate = report.framerate_sent,
            adapt_reason = %report.last_adapt_reason,
            adapt_changes = report.adapt_changes,
            rtt_ms = report.round_trip_time_ms,
            codec = %report.codec_name,
            "video send"
        );
    }
    for report in &stats.video_receiver_reports {
        info!(
            bytes = report.bytes_received,
            packets = report.packets_received,
            lost = report.packets_lost,
            fir = report.fir_count,
            pli = report.pli_count,
            nack = report.nack_count,
            resolution = %resolution_name(report.resolution_received),
            framerate = report.framerate_received,
            framerate_output = report.framerate_output,
            delay_ms = report.delay_ms,
            codec = %report.codec_name,
            "video recv"
        );
    }
}
