//! Resolution and codec value types reported by the media engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MediaFormatError;

/// Video frame resolution in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Resolution {
    /// 320x240
    pub const QVGA: Self = Self::new(320, 240);
    /// 640x480
    pub const VGA: Self = Self::new(640, 480);
    /// 1280x720
    pub const HD: Self = Self::new(1280, 720);
    /// 1920x1080
    pub const FULL_HD: Self = Self::new(1920, 1080);

    /// Create a resolution from width and height in pixels
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width-to-height ratio; 0.0 when the height is zero
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = MediaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MediaFormatError::InvalidResolution {
            value: s.to_string(),
        };
        let (width, height) = s
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(width, height))
    }
}

/// Audio codec identifiers the engine can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    /// G.711 mu-law
    Pcmu,
    /// G.711 A-law
    Pcma,
    /// Opus
    Opus,
    /// G.722
    G722,
    /// iSAC
    Isac,
    /// iLBC
    Ilbc,
    /// AAC
    Aac,
    /// AC-3
    Ac3,
    /// Nellymoser ASAO
    Asao,
    /// Codec the SDK does not recognize
    Unknown,
}

impl AudioCodec {
    /// Canonical lowercase codec name; [`AudioCodec::Unknown`] maps to
    /// `"unknown"`
    pub const fn name(&self) -> &'static str {
        match self {
            AudioCodec::Pcmu => "pcmu",
            AudioCodec::Pcma => "pcma",
            AudioCodec::Opus => "opus",
            AudioCodec::G722 => "g722",
            AudioCodec::Isac => "isac",
            AudioCodec::Ilbc => "ilbc",
            AudioCodec::Aac => "aac",
            AudioCodec::Ac3 => "ac3",
            AudioCodec::Asao => "asao",
            AudioCodec::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AudioCodec {
    type Err = MediaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pcmu" => Ok(AudioCodec::Pcmu),
            "pcma" => Ok(AudioCodec::Pcma),
            "opus" => Ok(AudioCodec::Opus),
            "g722" => Ok(AudioCodec::G722),
            "isac" => Ok(AudioCodec::Isac),
            "ilbc" => Ok(AudioCodec::Ilbc),
            "aac" => Ok(AudioCodec::Aac),
            "ac3" => Ok(AudioCodec::Ac3),
            "asao" => Ok(AudioCodec::Asao),
            "unknown" => Ok(AudioCodec::Unknown),
            _ => Err(MediaFormatError::UnknownAudioCodec {
                name: s.to_string(),
            }),
        }
    }
}

/// Video codec identifiers the engine can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// H.264
    H264,
    /// H.265
    H265,
    /// Codec the SDK does not recognize
    Unknown,
}

impl VideoCodec {
    /// Canonical lowercase codec name; [`VideoCodec::Unknown`] maps to
    /// `"unknown"`
    pub const fn name(&self) -> &'static str {
        match self {
            VideoCodec::Vp8 => "vp8",
            VideoCodec::Vp9 => "vp9",
            VideoCodec::H264 => "h264",
            VideoCodec::H265 => "h265",
            VideoCodec::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VideoCodec {
    type Err = MediaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vp8" => Ok(VideoCodec::Vp8),
            "vp9" => Ok(VideoCodec::Vp9),
            "h264" => Ok(VideoCodec::H264),
            "h265" => Ok(VideoCodec::H265),
            "unknown" => Ok(VideoCodec::Unknown),
            _ => Err(MediaFormatError::UnknownVideoCodec {
                name: s.to_string(),
            }),
        }
    }
}
