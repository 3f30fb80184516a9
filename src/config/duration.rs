//! Signed duration for thresholds that must be range-checked.
//!
//! `std::time::Duration` cannot hold a negative value, so a misconfigured
//! threshold like `-1ms` would be rejected by the decoder with a parse error
//! instead of reaching validation. `SignedDuration` keeps the sign so the
//! validation layer can report it as an invalid value.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A duration that may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignedDuration {
    negative: bool,
    magnitude: Duration,
}

impl SignedDuration {
    pub const ZERO: SignedDuration = SignedDuration {
        negative: false,
        magnitude: Duration::ZERO,
    };

    pub const fn from_millis(millis: i64) -> Self {
        Self {
            negative: millis < 0,
            magnitude: Duration::from_millis(millis.unsigned_abs()),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }

}

impl From<Duration> for SignedDuration {
    fn from(magnitude: Duration) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }
}

impl FromStr for SignedDuration {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let magnitude = humantime::parse_duration(rest)?;
        Ok(Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        })
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.is_zero() {
            return write!(f, "0s");
        }
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", humantime::format_duration(self.magnitude))
    }
}

impl Serialize for SignedDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SignedDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed() {
        let d: SignedDuration = "100ms".parse().unwrap();
        assert_eq!(d, SignedDuration::from_millis(100));
        assert!(!d.is_negative());

        let d: SignedDuration = "-1ms".parse().unwrap();
        assert!(d.is_negative());
        assert_eq!(d, SignedDuration::from_millis(-1));
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let d: SignedDuration = "-0s".parse().unwrap();
        assert!(!d.is_negative());
        assert_eq!(d, SignedDuration::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(SignedDuration::from_millis(100).to_string(), "100ms");
        assert_eq!(SignedDuration::from_millis(-1).to_string(), "-1ms");
        assert_eq!(SignedDuration::ZERO.to_string(), "0s");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("fast".parse::<SignedDuration>().is_err());
        assert!("-".parse::<SignedDuration>().is_err());
    }

    #[test]
    fn test_sign_must_touch_digits() {
        assert!("- 1ms".parse::<SignedDuration>().is_err());
        assert!("-1ms".parse::<SignedDuration>().is_ok());
        assert_eq!(
            " -1ms ".parse::<SignedDuration>().unwrap(),
            SignedDuration::from_millis(-1)
        );
    }
}
