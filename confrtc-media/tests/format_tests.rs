//! Unit tests for media format types and naming utilities
//!
//! This module contains tests for resolution rendering, codec naming,
//! and parsing names back into typed values.

use std::str::FromStr;

use confrtc_media::*;

// ============================================================================
// RESOLUTION TESTS
// ============================================================================

#[test]
fn test_resolution_name_contains_both_values() {
    let cases = [
        Resolution::new(0, 0),
        Resolution::new(176, 144),
        Resolution::VGA,
        Resolution::HD,
        Resolution::new(3840, 2160),
    ];

    for resolution in cases {
        let name = resolution_name(resolution);
        assert!(name.contains(&resolution.width.to_string()));
        assert!(name.contains(&resolution.height.to_string()));
        // Deterministic: the same value renders the same string
        assert_eq!(name, resolution_name(resolution));
    }
}

#[test]
fn test_resolution_name_format() {
    assert_eq!(resolution_name(Resolution::new(640, 480)), "640x480");
    assert_eq!(resolution_name(Resolution::FULL_HD), "1920x1080");
    assert_eq!(resolution_name(Resolution::default()), "0x0");
}

#[test]
fn test_resolution_helpers() {
    let hd = Resolution::HD;
    assert_eq!(hd.pixel_count(), 1280 * 720);
    assert!((hd.aspect_ratio() - 16.0 / 9.0).abs() < 1e-9);

    // Degenerate resolutions stay total
    assert_eq!(Resolution::new(0, 0).pixel_count(), 0);
    assert_eq!(Resolution::new(640, 0).aspect_ratio(), 0.0);
}

#[test]
fn test_resolution_json_shape() {
    let json = serde_json::to_value(Resolution::HD).unwrap();
    assert_eq!(json["width"], 1280);
    assert_eq!(json["height"], 720);
}

#[test]
fn test_resolution_parse() {
    assert_eq!(
        Resolution::from_str("1280x720").unwrap(),
        Resolution::HD
    );
    assert_eq!(
        Resolution::from_str("640X480").unwrap(),
        Resolution::VGA
    );

    assert!(matches!(
        Resolution::from_str("wide"),
        Err(MediaFormatError::InvalidResolution { .. })
    ));
    assert!(matches!(
        Resolution::from_str("640x-480"),
        Err(MediaFormatError::InvalidResolution { .. })
    ));
}

// ============================================================================
// AUDIO CODEC TESTS
// ============================================================================

#[test]
fn test_audio_codec_names_are_total_and_stable() {
    let codecs = [
        AudioCodec::Pcmu,
        AudioCodec::Pcma,
        AudioCodec::Opus,
        AudioCodec::G722,
        AudioCodec::Isac,
        AudioCodec::Ilbc,
        AudioCodec::Aac,
        AudioCodec::Ac3,
        AudioCodec::Asao,
        AudioCodec::Unknown,
    ];

    for codec in codecs {
        let name = audio_codec_name(codec);
        assert!(!name.is_empty());
        assert_eq!(name, codec.to_string());
    }
}

#[test]
fn test_audio_codec_canonical_names() {
    assert_eq!(audio_codec_name(AudioCodec::Opus), "opus");
    assert_eq!(audio_codec_name(AudioCodec::Pcmu), "pcmu");
    assert_eq!(audio_codec_name(AudioCodec::G722), "g722");
    assert_eq!(audio_codec_name(AudioCodec::Unknown), "unknown");
}

#[test]
fn test_audio_codec_parse() {
    assert_eq!(AudioCodec::from_str("opus").unwrap(), AudioCodec::Opus);
    assert_eq!(AudioCodec::from_str("OPUS").unwrap(), AudioCodec::Opus);
    assert_eq!(AudioCodec::from_str("iSAC").unwrap(), AudioCodec::Isac);

    let err = AudioCodec::from_str("g729").unwrap_err();
    assert!(matches!(
        err,
        MediaFormatError::UnknownAudioCodec { ref name } if name == "g729"
    ));
}

// ============================================================================
// VIDEO CODEC TESTS
// ============================================================================

#[test]
fn test_video_codec_names_are_total_and_stable() {
    let codecs = [
        VideoCodec::Vp8,
        VideoCodec::Vp9,
        VideoCodec::H264,
        VideoCodec::H265,
        VideoCodec::Unknown,
    ];

    for codec in codecs {
        let name = video_codec_name(codec);
        assert!(!name.is_empty());
        assert_eq!(name, codec.to_string());
    }
}

#[test]
fn test_video_codec_canonical_names() {
    assert_eq!(video_codec_name(VideoCodec::Vp8), "vp8");
    assert_eq!(video_codec_name(VideoCodec::H264), "h264");
    assert_eq!(video_codec_name(VideoCodec::Unknown), "unknown");
}

#[test]
fn test_video_codec_parse() {
    assert_eq!(VideoCodec::from_str("vp9").unwrap(), VideoCodec::Vp9);
    assert_eq!(VideoCodec::from_str("H264").unwrap(), VideoCodec::H264);

    assert!(matches!(
        VideoCodec::from_str("av1"),
        Err(MediaFormatError::UnknownVideoCodec { .. })
    ));
}
