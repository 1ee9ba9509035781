//! Human-readable names for media format values
//!
//! Free functions with no shared state. All of them are referentially
//! transparent, so they are safe to call from whatever thread the
//! engine delivers its stats callbacks on.

use crate::format::{AudioCodec, Resolution, VideoCodec};

/// Render a resolution as `{width}x{height}`, e.g. `"1280x720"`
pub fn resolution_name(resolution: Resolution) -> String {
    resolution.to_string()
}

/// Canonical name for an audio codec; `"unknown"` for the sentinel
pub fn audio_codec_name(codec: AudioCodec) -> &'static str {
    codec.name()
}

/// Canonical name for a video codec; `"unknown"` for the sentinel
pub fn video_codec_name(codec: VideoCodec) -> &'static str {
    codec.name()
}
