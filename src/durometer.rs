//! The fixed set of bushing hardness ratings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hardness rating of a bushing on the "a" scale.
///
/// Variants are declared in ascending order, so the derived `Ord` matches
/// the numeric hardness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Durometer {
    A78,
    A81,
    A85,
    A87,
    A90,
    A93,
    A95,
    A97,
}

impl Durometer {
    /// Every rating, ascending.
    pub const ALL: [Durometer; 8] = [
        Durometer::A78,
        Durometer::A81,
        Durometer::A85,
        Durometer::A87,
        Durometer::A90,
        Durometer::A93,
        Durometer::A95,
        Durometer::A97,
    ];

    pub fn value(self) -> u8 {
        match self {
            Durometer::A78 => 78,
            Durometer::A81 => 81,
            Durometer::A85 => 85,
            Durometer::A87 => 87,
            Durometer::A90 => 90,
            Durometer::A93 => 93,
            Durometer::A95 => 95,
            Durometer::A97 => 97,
        }
    }

    pub fn from_value(value: u8) -> Option<Durometer> {
        Self::ALL.iter().copied().find(|d| d.value() == value)
    }

    /// Display label, e.g. `"87a"`.
    pub fn label(self) -> &'static str {
        match self {
            Durometer::A78 => "78a",
            Durometer::A81 => "81a",
            Durometer::A85 => "85a",
            Durometer::A87 => "87a",
            Durometer::A90 => "90a",
            Durometer::A93 => "93a",
            Durometer::A95 => "95a",
            Durometer::A97 => "97a",
        }
    }

    /// Background color used when rendering this rating.
    pub fn color(self) -> &'static str {
        match self {
            Durometer::A78 => "#0000FF",
            Durometer::A81 => "#FF6600",
            Durometer::A85 => "#FFFF00",
            Durometer::A87 => "#9900FF",
            Durometer::A90 => "#FF0000",
            Durometer::A93 => "#00CC00",
            Durometer::A95 => "#CCECB8",
            Durometer::A97 => "#FF00FF",
        }
    }

    /// The rating closest to `approx`. Scans ascending and keeps the first
    /// minimum, so an exact tie resolves to the softer rating.
    pub fn nearest(approx: f64) -> Durometer {
        let mut best = Durometer::ALL[0];
        let mut best_diff = (f64::from(best.value()) - approx).abs();
        for &candidate in &Durometer::ALL[1..] {
            let diff = (f64::from(candidate.value()) - approx).abs();
            if diff < best_diff {
                best = candidate;
                best_diff = diff;
            }
        }
        best
    }
}

impl fmt::Display for Durometer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Durometer label parsing errors
#[derive(Debug, Clone, PartialEq)]
pub enum DuroParseError {
    EmptyInput,
    MissingSuffix(String),
    InvalidNumber(String),
    UnknownRating(u8),
}

impl fmt::Display for DuroParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuroParseError::EmptyInput => write!(f, "Durometer cannot be empty"),
            DuroParseError::MissingSuffix(s) => {
                write!(f, "Durometer '{}' must end with the 'a' scale suffix", s)
            }
            DuroParseError::InvalidNumber(s) => write!(f, "Invalid durometer value: {}", s),
            DuroParseError::UnknownRating(v) => write!(
                f,
                "No {}a bushing available (expected one of 78a, 81a, 85a, 87a, 90a, 93a, 95a, 97a)",
                v
            ),
        }
    }
}

impl std::error::Error for DuroParseError {}

impl FromStr for Durometer {
    type Err = DuroParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DuroParseError::EmptyInput);
        }

        let digits = trimmed
            .strip_suffix('a')
            .or_else(|| trimmed.strip_suffix('A'))
            .ok_or_else(|| DuroParseError::MissingSuffix(trimmed.to_string()))?;

        let value: u8 = digits
            .parse()
            .map_err(|_| DuroParseError::InvalidNumber(digits.to_string()))?;

        Durometer::from_value(value).ok_or(DuroParseError::UnknownRating(value))
    }
}

impl From<Durometer> for String {
    fn from(duro: Durometer) -> Self {
        duro.label().to_string()
    }
}

impl TryFrom<String> for Durometer {
    type Error = DuroParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<u8> = Durometer::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![78, 81, 85, 87, 90, 93, 95, 97]);
        assert!(Durometer::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nearest_picks_closest() {
        assert_eq!(Durometer::nearest(79.0), Durometer::A78);
        assert_eq!(Durometer::nearest(88.44), Durometer::A87);
        assert_eq!(Durometer::nearest(89.0), Durometer::A90);
        assert_eq!(Durometer::nearest(500.0), Durometer::A97);
        assert_eq!(Durometer::nearest(-10.0), Durometer::A78);
    }

    #[test]
    fn test_nearest_tie_prefers_softer() {
        // 83 sits exactly between 81 and 85
        assert_eq!(Durometer::nearest(83.0), Durometer::A81);
        assert_eq!(Durometer::nearest(94.0), Durometer::A93);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Durometer::A78.color(), "#0000FF");
        assert_eq!(Durometer::A87.color(), "#9900FF");
        assert_eq!(Durometer::A95.color(), "#CCECB8");
        assert_eq!(Durometer::A97.color(), "#FF00FF");
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("87a".parse::<Durometer>(), Ok(Durometer::A87));
        assert_eq!(" 93A ".parse::<Durometer>(), Ok(Durometer::A93));
        assert_eq!("".parse::<Durometer>(), Err(DuroParseError::EmptyInput));
        assert_eq!(
            "87".parse::<Durometer>(),
            Err(DuroParseError::MissingSuffix("87".to_string()))
        );
        assert_eq!(
            "xa".parse::<Durometer>(),
            Err(DuroParseError::InvalidNumber("x".to_string()))
        );
        assert_eq!("88a".parse::<Durometer>(), Err(DuroParseError::UnknownRating(88)));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Durometer::A90).unwrap();
        assert_eq!(json, "\"90a\"");
        let back: Durometer = serde_json::from_str("\"81a\"").unwrap();
        assert_eq!(back, Durometer::A81);
        assert!(serde_json::from_str::<Durometer>("\"80a\"").is_err());
    }
}
