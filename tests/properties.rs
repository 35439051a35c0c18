use mergetrace::{assign_tracks, generate, merge_intervals, Interval, StepKind};
use proptest::prelude::*;

/// Endpoints on a half-unit grid. `len` may be zero or negative, so the list
/// can hold zero-length and inverted intervals.
fn half_grid(pairs: Vec<(i32, i32)>) -> Vec<Interval> {
    pairs
        .into_iter()
        .map(|(start, len)| {
            Interval::new(f64::from(start) * 0.5, f64::from(start + len) * 0.5).unwrap()
        })
        .collect()
}

/// Any finite intervals: negative, fractional, zero-length or inverted.
fn intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((-30i32..30, -5i32..10), 0..12).prop_map(half_grid)
}

/// Intervals with `start < end`.
fn proper_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((-30i32..30, 1i32..10), 0..12).prop_map(half_grid)
}

fn covered(list: &[Interval], point: f64) -> bool {
    list.iter().any(|i| i.contains(point))
}

/// Largest number of intervals covering one point, treating ends as open.
fn max_depth(list: &[Interval]) -> usize {
    list.iter()
        .map(|at| {
            list.iter()
                .filter(|i| i.start() <= at.start() && at.start() < i.end())
                .count()
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn trace_is_bracketed(input in intervals()) {
        let steps = generate(&input);
        prop_assert!(!steps.is_empty());
        prop_assert_eq!(steps[0].kind(), StepKind::Initial);
        if input.is_empty() {
            prop_assert_eq!(steps.len(), 1);
        } else {
            prop_assert_eq!(steps.last().unwrap().kind(), StepKind::Complete);
            // initial, sort, pick_first, complete, plus two per remaining interval
            prop_assert_eq!(steps.len(), 4 + 2 * (input.len() - 1));
        }
    }

    #[test]
    fn result_is_sorted_and_strictly_separated(input in intervals()) {
        let result = merge_intervals(&input);
        for pair in result.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start());
        }
    }

    #[test]
    fn result_covers_the_same_points(input in intervals()) {
        let result = merge_intervals(&input);
        // Quarter steps fall both on and between the half-unit endpoints.
        for quarter_steps in -72..=84 {
            let point = f64::from(quarter_steps) * 0.25;
            prop_assert_eq!(covered(&input, point), covered(&result, point));
        }
    }

    #[test]
    fn complete_step_matches_merge(input in intervals()) {
        let steps = generate(&input);
        let last = steps.last().unwrap();
        if !input.is_empty() {
            let expected = merge_intervals(&input);
            prop_assert_eq!(last.merged_intervals(), expected.as_slice());
        }
    }

    #[test]
    fn generation_is_idempotent(input in intervals()) {
        prop_assert_eq!(generate(&input), generate(&input));
    }

    #[test]
    fn merged_snapshot_end_never_shrinks(input in intervals()) {
        let steps = generate(&input);
        for pair in steps.windows(2) {
            if pair[1].kind() == StepKind::Merge {
                let before = pair[0].merged_intervals().last().unwrap();
                let after = pair[1].merged_intervals().last().unwrap();
                prop_assert_eq!(before.start(), after.start());
                prop_assert!(after.end() >= before.end());
            }
        }
    }

    #[test]
    fn inverted_intervals_never_extend_the_accumulator(input in intervals()) {
        let steps = generate(&input);
        for pair in steps.windows(2) {
            if pair[1].kind() != StepKind::Merge {
                continue;
            }
            let Some(i) = pair[1].current_index() else {
                continue;
            };
            let next = pair[1].intervals()[i].interval;
            if next.is_inverted() {
                prop_assert_eq!(
                    pair[0].merged_intervals().last(),
                    pair[1].merged_intervals().last()
                );
            }
        }
    }

    #[test]
    fn tracks_never_collide(input in intervals()) {
        let tracked = assign_tracks(&input);
        prop_assert_eq!(tracked.len(), input.len());
        for (i, a) in tracked.iter().enumerate() {
            for b in &tracked[i + 1..] {
                if a.track == b.track {
                    prop_assert!(!a.interval.overlaps_strictly(&b.interval));
                }
            }
        }
    }

    #[test]
    fn tracks_are_minimal_and_ordered(input in proper_intervals()) {
        let tracked = assign_tracks(&input);
        prop_assert_eq!(tracked.len(), input.len());
        for (t, i) in tracked.iter().zip(&input) {
            prop_assert_eq!(&t.interval, i);
        }
        let used = tracked.iter().map(|t| t.track + 1).max().unwrap_or(0);
        prop_assert_eq!(used, max_depth(&input));
        prop_assert_eq!(assign_tracks(&input), tracked);
    }
}
