use crate::consts::{FINGER_COUNT, ROW_COUNT};
use crate::error::{KeyFitError, KfResult};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Finger {
    #[strum(serialize = "l-pinky")]
    #[serde(rename = "l-pinky")]
    LeftPinky,
    #[strum(serialize = "l-ring")]
    #[serde(rename = "l-ring")]
    LeftRing,
    #[strum(serialize = "l-middle")]
    #[serde(rename = "l-middle")]
    LeftMiddle,
    #[strum(to_string = "l-index", serialize = "l-point")]
    #[serde(rename = "l-index", alias = "l-point")]
    LeftIndex,
    #[strum(to_string = "r-index", serialize = "r-point")]
    #[serde(rename = "r-index", alias = "r-point")]
    RightIndex,
    #[strum(serialize = "r-middle")]
    #[serde(rename = "r-middle")]
    RightMiddle,
    #[strum(serialize = "r-ring")]
    #[serde(rename = "r-ring")]
    RightRing,
    #[strum(serialize = "r-pinky")]
    #[serde(rename = "r-pinky")]
    RightPinky,
    #[strum(serialize = "thumb")]
    #[serde(rename = "thumb")]
    Thumb,
}

impl Finger {
    /// The 8 tracked fingers, left pinky to left index, right index to right pinky.
    pub const TRACKED: [Finger; FINGER_COUNT] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    /// Slot in the canonical finger order. `None` for the thumb.
    #[inline(always)]
    pub fn index(self) -> Option<usize> {
        match self {
            Finger::LeftPinky => Some(0),
            Finger::LeftRing => Some(1),
            Finger::LeftMiddle => Some(2),
            Finger::LeftIndex => Some(3),
            Finger::RightIndex => Some(4),
            Finger::RightMiddle => Some(5),
            Finger::RightRing => Some(6),
            Finger::RightPinky => Some(7),
            Finger::Thumb => None,
        }
    }

    #[inline(always)]
    pub fn hand(self) -> Hand {
        match self {
            Finger::LeftPinky | Finger::LeftRing | Finger::LeftMiddle | Finger::LeftIndex => {
                Hand::Left
            }
            Finger::RightIndex | Finger::RightMiddle | Finger::RightRing | Finger::RightPinky => {
                Hand::Right
            }
            Finger::Thumb => Hand::Neutral,
        }
    }

    #[inline(always)]
    pub fn is_thumb(self) -> bool {
        self == Finger::Thumb
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
    /// Keys pressed by the thumb (space bar) belong to neither hand.
    Neutral,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Number,
    Top,
    Home,
    Bottom,
}

impl Row {
    pub const ALL: [Row; ROW_COUNT] = [Row::Number, Row::Top, Row::Home, Row::Bottom];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Row> {
        Self::ALL.get(idx).copied()
    }

    /// Number of rows crossed moving from `self` to `other`.
    #[inline(always)]
    pub fn distance_to(self, other: Row) -> usize {
        self.index().abs_diff(other.index())
    }
}

/// Per-character cost model entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub finger: Finger,
    pub hand: Hand,
    pub row: Row,
    pub effort: f64,
    pub distance: f64,
}

impl KeyMetrics {
    pub fn new(finger: Finger, row: Row, effort: f64, distance: f64) -> Self {
        Self {
            finger,
            hand: finger.hand(),
            row,
            effort,
            distance,
        }
    }

    /// Rejects costs that would poison every downstream sum.
    pub fn validate(&self) -> KfResult<()> {
        if !self.effort.is_finite() || self.effort < 0.0 {
            return Err(KeyFitError::Validation(format!(
                "effort must be a non-negative number, got {}",
                self.effort
            )));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(KeyFitError::Validation(format!(
                "distance must be a non-negative number, got {}",
                self.distance
            )));
        }
        if self.hand != self.finger.hand() {
            return Err(KeyFitError::Validation(format!(
                "finger {} cannot be on the {} hand",
                self.finger, self.hand
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_finger_names_round_trip() {
        for finger in Finger::iter() {
            let name = finger.to_string();
            assert_eq!(Finger::from_str(&name).unwrap(), finger);
        }
        assert_eq!(Finger::from_str("l-point").unwrap(), Finger::LeftIndex);
    }

    #[test]
    fn test_tracked_order_matches_index() {
        for (i, finger) in Finger::TRACKED.iter().enumerate() {
            assert_eq!(finger.index(), Some(i));
        }
        assert_eq!(Finger::Thumb.index(), None);
    }

    #[test]
    fn test_hand_derivation() {
        assert_eq!(Finger::LeftIndex.hand(), Hand::Left);
        assert_eq!(Finger::RightPinky.hand(), Hand::Right);
        assert_eq!(Finger::Thumb.hand(), Hand::Neutral);
    }

    #[test]
    fn test_row_distance() {
        assert_eq!(Row::Number.distance_to(Row::Bottom), 3);
        assert_eq!(Row::Bottom.distance_to(Row::Number), 3);
        assert_eq!(Row::Home.distance_to(Row::Home), 0);
    }

    #[test]
    fn test_negative_effort_rejected() {
        let k = KeyMetrics::new(Finger::LeftRing, Row::Home, -1.0, 0.0);
        assert!(k.validate().is_err());
        let k = KeyMetrics::new(Finger::LeftRing, Row::Home, 1.0, f64::NAN);
        assert!(k.validate().is_err());
    }
}
