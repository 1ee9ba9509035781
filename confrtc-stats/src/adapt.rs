//! Video quality adaptation reasons

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Why the sender last adapted outgoing video quality.
///
/// Stored as a bitmask: the engine may report several reasons at once,
/// and bits outside the named set are preserved so a newer engine can
/// report reasons this SDK version does not know yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdaptReasons(u32);

impl AdaptReasons {
    /// No adaptation has happened
    pub const NONE: Self = Self(0);
    /// Adapted because of CPU load
    pub const CPU: Self = Self(1);
    /// Adapted because of bandwidth limits
    pub const BANDWIDTH: Self = Self(2);
    /// Adapted because of the rendered view size
    pub const VIEW: Self = Self(4);

    /// Build from a raw engine-reported value; unknown bits are kept
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True when no reason bit is set
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AdaptReasons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AdaptReasons {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for AdaptReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let mut sep = "";
        for (flag, label) in [
            (Self::CPU, "cpu"),
            (Self::BANDWIDTH, "bandwidth"),
            (Self::VIEW, "view"),
        ] {
            if self.contains(flag) {
                write!(f, "{}{}", sep, label)?;
                sep = "|";
            }
        }
        let known = Self::CPU.0 | Self::BANDWIDTH.0 | Self::VIEW.0;
        let unknown = self.0 & !known;
        if unknown != 0 {
            write!(f, "{}0x{:x}", sep, unknown)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_reasons() {
        let reasons = AdaptReasons::CPU | AdaptReasons::BANDWIDTH;
        assert!(reasons.contains(AdaptReasons::CPU));
        assert!(reasons.contains(AdaptReasons::BANDWIDTH));
        assert!(!reasons.contains(AdaptReasons::VIEW));
        assert!(!reasons.is_none());
        assert_eq!(reasons.bits(), 3);
    }

    #[test]
    fn test_none_contains_nothing_but_none() {
        let none = AdaptReasons::NONE;
        assert!(none.is_none());
        assert!(none.contains(AdaptReasons::NONE));
        assert!(!none.contains(AdaptReasons::CPU));
    }

    #[test]
    fn test_unknown_bits_survive() {
        let raw = 0x8 | 0x1;
        let reasons = AdaptReasons::from_bits(raw);
        assert_eq!(reasons.bits(), raw);
        assert!(reasons.contains(AdaptReasons::CPU));
    }

    #[test]
    fn test_display() {
        assert_eq!(AdaptReasons::NONE.to_string(), "none");
        assert_eq!(AdaptReasons::CPU.to_string(), "cpu");
        assert_eq!(
            (AdaptReasons::CPU | AdaptReasons::VIEW).to_string(),
            "cpu|view"
        );
        assert_eq!(AdaptReasons::from_bits(0x9).to_string(), "cpu|0x8");
    }
}
