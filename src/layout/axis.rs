//! Number-line scale shared by every interval box in a step.

use crate::interval::Interval;
use crate::trace::Step;

/// Linear mapping from interval values to a 0-100 horizontal percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    /// Fits the axis to every endpoint of `intervals`. `None` when empty.
    pub fn fit<'a, I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Interval>,
    {
        intervals
            .into_iter()
            .flat_map(|i| [i.start(), i.end()])
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .map(|(min, max)| Self { min, max })
    }

    /// Fits the axis to both the working list and the merged result of a step.
    pub fn for_step(step: &Step) -> Option<Self> {
        let sources = step.intervals().iter().map(|t| &t.interval);
        Self::fit(sources.chain(step.merged_intervals()))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the axis, `1` when every endpoint is the same value.
    pub fn range(&self) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            1.0
        } else {
            range
        }
    }

    /// Horizontal position of `value` as a percentage of the axis width.
    pub fn position(&self, value: f64) -> f64 {
        (value - self.min) / self.range() * 100.0
    }

    /// Horizontal center of `interval` as a percentage.
    pub fn center(&self, interval: &Interval) -> f64 {
        (self.position(interval.start()) + self.position(interval.end())) / 2.0
    }

    fn tick_count(&self) -> usize {
        let range = self.range();
        if range <= 10.0 {
            (range.floor() as usize + 1).max(2)
        } else if range <= 50.0 {
            11
        } else {
            15
        }
    }

    /// Rounded tick values. Ticks closer than 30% of a tick step to an
    /// earlier one are dropped; the first and last are always kept.
    pub fn ticks(&self) -> Vec<f64> {
        let count = self.tick_count();
        let step = self.range() / (count - 1) as f64;
        let mut ticks: Vec<f64> = Vec::with_capacity(count);
        for i in 0..count {
            let value = (self.min + i as f64 * step).round();
            let crowded = ticks.iter().any(|t| (t - value).abs() < step * 0.3);
            if i == 0 || i == count - 1 || !crowded {
                ticks.push(value);
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn fit_spans_all_endpoints() {
        let axis = Axis::fit(&[iv(2.0, 6.0), iv(1.0, 3.0), iv(15.0, 18.0)]).unwrap();
        assert_eq!(axis.min(), 1.0);
        assert_eq!(axis.max(), 18.0);
        assert_eq!(axis.range(), 17.0);
    }

    #[test]
    fn fit_empty_is_none() {
        assert!(Axis::fit(&Vec::<Interval>::new()).is_none());
    }

    #[test]
    fn degenerate_range_is_one() {
        let axis = Axis::fit(&[iv(3.0, 3.0)]).unwrap();
        assert_eq!(axis.range(), 1.0);
        assert_eq!(axis.position(3.0), 0.0);
    }

    #[test]
    fn positions_are_percentages() {
        let axis = Axis::fit(&[iv(0.0, 10.0)]).unwrap();
        assert_eq!(axis.position(0.0), 0.0);
        assert_eq!(axis.position(10.0), 100.0);
        assert_eq!(axis.center(&iv(2.0, 4.0)), 30.0);
    }

    #[test]
    fn small_range_ticks_every_unit() {
        let axis = Axis::fit(&[iv(1.0, 5.0)]).unwrap();
        assert_eq!(axis.ticks(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn medium_range_uses_eleven_ticks() {
        let axis = Axis::fit(&[iv(0.0, 20.0)]).unwrap();
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&20.0));
    }

    #[test]
    fn for_step_includes_merged_result() {
        let steps = crate::trace::generate(&[iv(1.0, 3.0), iv(2.0, 6.0)]);
        let axis = Axis::for_step(&steps[0]).unwrap();
        assert_eq!((axis.min(), axis.max()), (1.0, 6.0));
        assert!(Axis::for_step(&crate::trace::generate(&[])[0]).is_none());
    }
}
