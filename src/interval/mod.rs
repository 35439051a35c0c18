//! Closed numeric interval `[start, end]`.

mod error;

use std::fmt::Display;

pub use error::IntervalError;

/// Closed range `[start, end]` over finite numbers.
///
/// Both endpoints are guaranteed finite, which keeps every comparison made by
/// the trace engine and the track assigner well defined. An inverted range
/// (`start > end`) is accepted as-is and carried through unchanged; use
/// [`Interval::is_inverted`] to detect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if either endpoint is `NaN` or
    /// infinite.
    pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
        if start.is_finite() && end.is_finite() {
            Ok(Self { start, end })
        } else {
            Err(IntervalError::NonFinite { start, end })
        }
    }

    /// Creates `[start, end]` from whole numbers, which are always finite.
    pub(crate) fn whole(start: i32, end: i32) -> Self {
        Self {
            start: f64::from(start),
            end: f64::from(end),
        }
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Distance from start to end. Negative for inverted intervals.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if `other` starts no later than this interval ends.
    ///
    /// This is the merge test applied between the accumulator and the next
    /// start-sorted interval; touching endpoints count as overlapping.
    pub fn reaches(&self, other: &Interval) -> bool {
        self.end >= other.start
    }

    /// Checks if the closed ranges share at least one point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if the open interiors intersect. Touching endpoints do not count.
    pub fn overlaps_strictly(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `other` lies entirely inside this interval.
    pub fn covers(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Returns true if `position` ∈ `[start, end]`.
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns a copy whose end is `max(self.end, other.end)`.
    ///
    /// Both inputs are finite so the result stays finite.
    pub(crate) fn extended_to(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start,
            end: self.end.max(other.end),
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = IntervalError;

    fn try_from((start, end): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([start, end]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

/// Builds a list of intervals from `(start, end)` pairs, rejecting the first
/// non-finite one.
pub fn intervals_from_pairs<I>(pairs: I) -> Result<Vec<Interval>, IntervalError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    pairs.into_iter().map(Interval::try_from).collect()
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let interval = iv(1.0, 3.0);
        assert_eq!(interval.start(), 1.0);
        assert_eq!(interval.end(), 3.0);
        assert_eq!(interval.length(), 2.0);
        assert!(!interval.is_inverted());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite { .. })
        ));
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_whole_matches_new() {
        assert_eq!(Interval::whole(2, 6), iv(2.0, 6.0));
        assert_eq!(Interval::whole(i32::MIN, i32::MAX).start(), -2147483648.0);
    }

    #[test]
    fn test_inverted_is_accepted() {
        let interval = iv(5.0, 2.0);
        assert!(interval.is_inverted());
        assert_eq!(interval.length(), -3.0);
    }

    #[test]
    fn test_reaches_is_closed() {
        assert!(iv(1.0, 4.0).reaches(&iv(4.0, 5.0)));
        assert!(iv(1.0, 4.0).reaches(&iv(2.0, 3.0)));
        assert!(!iv(1.0, 4.0).reaches(&iv(4.5, 5.0)));
    }

    #[test]
    fn test_overlaps() {
        assert!(iv(0.0, 100.0).overlaps(&iv(50.0, 150.0)));
        assert!(iv(50.0, 150.0).overlaps(&iv(0.0, 100.0)));
        assert!(iv(0.0, 10.0).overlaps(&iv(10.0, 20.0)));
        assert!(!iv(0.0, 100.0).overlaps(&iv(200.0, 300.0)));
    }

    #[test]
    fn test_overlaps_strictly_ignores_touching() {
        assert!(!iv(0.0, 10.0).overlaps_strictly(&iv(10.0, 20.0)));
        assert!(iv(0.0, 10.0).overlaps_strictly(&iv(9.0, 20.0)));
    }

    #[test]
    fn test_covers_and_contains() {
        let outer = iv(1.0, 6.0);
        assert!(outer.covers(&iv(2.0, 6.0)));
        assert!(outer.covers(&outer));
        assert!(!outer.covers(&iv(0.0, 2.0)));
        assert!(outer.contains(1.0));
        assert!(outer.contains(6.0));
        assert!(!outer.contains(6.5));
    }

    #[test]
    fn test_extended_to_keeps_start() {
        let grown = iv(1.0, 3.0).extended_to(&iv(2.0, 6.0));
        assert_eq!(grown, iv(1.0, 6.0));
        let same = iv(1.0, 10.0).extended_to(&iv(2.0, 6.0));
        assert_eq!(same, iv(1.0, 10.0));
    }

    #[test]
    fn test_display_trims_integral_values() {
        assert_eq!(iv(1.0, 3.0).to_string(), "[1, 3]");
        assert_eq!(iv(0.5, 2.25).to_string(), "[0.5, 2.25]");
    }

    #[test]
    fn test_from_pairs() {
        let list = intervals_from_pairs([(1.0, 3.0), (2.0, 6.0)]).unwrap();
        assert_eq!(list, vec![iv(1.0, 3.0), iv(2.0, 6.0)]);
        assert!(intervals_from_pairs([(1.0, 3.0), (f64::NAN, 6.0)]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_named_fields() {
        let json = serde_json::to_string(&iv(1.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"start":1.0,"end":3.0}"#);
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv(1.0, 3.0));
    }
}
