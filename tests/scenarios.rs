use mergetrace::input::{parse_intervals, preset, PRESETS};
use mergetrace::layout::{connections, merged_groups, track_count, LaneMetrics, StepLayout};
use mergetrace::playback::{Player, RecordingSink};
use mergetrace::{assign_tracks, generate, Interval, StepKind};

fn iv(start: f64, end: f64) -> Interval {
    Interval::new(start, end).unwrap()
}

fn complete(input: &[Interval]) -> Vec<Interval> {
    let steps = generate(input);
    let last = steps.last().unwrap();
    assert_eq!(last.kind(), StepKind::Complete);
    last.merged_intervals().to_vec()
}

#[test]
fn classic_example_merges_first_pair() {
    let input = parse_intervals("[[1,3],[2,6],[8,10],[15,18]]").unwrap();
    assert_eq!(
        complete(&input),
        vec![iv(1.0, 6.0), iv(8.0, 10.0), iv(15.0, 18.0)]
    );
}

#[test]
fn touching_endpoints_merge() {
    let input = parse_intervals("1,4;4,5").unwrap();
    assert_eq!(complete(&input), vec![iv(1.0, 5.0)]);
}

#[test]
fn empty_input_yields_only_initial() {
    let steps = generate(&[]);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].kind(), StepKind::Initial);
    assert!(steps[0].merged_intervals().is_empty());
    assert!(assign_tracks(&[]).is_empty());
}

#[test]
fn all_overlapping_need_four_tracks() {
    let input = preset("all_overlap").unwrap().intervals();
    let tracked = assign_tracks(&input);
    assert_eq!(track_count(&tracked), 4);
    let mut tracks: Vec<usize> = tracked.iter().map(|t| t.track).collect();
    tracks.sort_unstable();
    tracks.dedup();
    assert_eq!(tracks.len(), 4);
}

#[test]
fn disjoint_intervals_share_track_zero() {
    let input = preset("no_overlap").unwrap().intervals();
    assert!(assign_tracks(&input).iter().all(|t| t.track == 0));
}

#[test]
fn every_preset_produces_a_complete_trace() {
    for p in &PRESETS {
        let steps = generate(&p.intervals());
        assert_eq!(steps.first().map(|s| s.kind()), Some(StepKind::Initial));
        assert_eq!(steps.last().map(|s| s.kind()), Some(StepKind::Complete));
    }
}

#[test]
fn displayed_step_layout_follows_the_trace() {
    let steps = generate(&preset("complex").unwrap().intervals());
    let last = steps.last().unwrap();
    let groups = merged_groups(&last.plain_intervals(), last.merged_intervals());
    assert!(groups.iter().all(Option::is_some));
    assert_eq!(connections(last).len(), last.intervals().len());

    let layout = StepLayout::compute(last, &LaneMetrics::default());
    assert_eq!(layout.sources.len(), 6);
    assert_eq!(layout.merged.len(), 3);
    assert_eq!(layout.merged_tracks(), 1);
}

#[test]
fn player_walks_the_whole_trace() {
    let steps = generate(&preset("example1").unwrap().intervals());
    let total = steps.len();
    let mut player = Player::with_sink(steps, RecordingSink::new());
    player.toggle_play();
    while player.tick() {}
    assert_eq!(player.sink().narrated().len(), total);
    assert_eq!(
        player.current().map(|s| s.kind()),
        Some(StepKind::Complete)
    );
}
