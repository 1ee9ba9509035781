//! # ConfRTC Media
//!
//! Media format model for the ConfRTC client SDK. This crate defines the
//! resolution and codec value types the media engine reports in its
//! statistics, plus the naming utilities used wherever a human-readable
//! label is needed for one of those values.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod naming;

// Re-export main types
pub use error::{MediaFormatError, MediaFormatResult};
pub use format::{AudioCodec, Resolution, VideoCodec};
pub use naming::{audio_codec_name, resolution_name, video_codec_name};
