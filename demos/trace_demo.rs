//! Prints the merge trace and track layout for an interval list.
//!
//! ```text
//! cargo run --example trace_demo -- "[[1,3],[2,6],[8,10],[15,18]]"
//! RUST_LOG=mergetrace=trace cargo run --example trace_demo -- example1
//! ```

use mergetrace::input::{default_preset, format_intervals, parse_intervals, preset};
use mergetrace::layout::{palette_color, track_count, LaneMetrics, StepLayout};
use mergetrace::playback::{NarrationSettings, Player, RecordingSink};
use mergetrace::{assign_tracks, generate_with, Language};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arg = std::env::args().nth(1);
    let intervals = match arg.as_deref() {
        None => default_preset().intervals(),
        Some(text) => match preset(text) {
            Some(p) => p.intervals(),
            None => match parse_intervals(text) {
                Ok(list) => list,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(2);
                }
            },
        },
    };

    println!("Input: {}", format_intervals(&intervals));
    let tracked = assign_tracks(&intervals);
    println!("Input tracks: {}\n", track_count(&tracked));

    let steps = generate_with(&intervals, Language::En);
    let narration = NarrationSettings {
        language: Language::En,
        ..NarrationSettings::default()
    };
    let mut player = Player::with_sink(steps, RecordingSink::new()).with_narration(narration);
    player.toggle_play();
    loop {
        if let Some(step) = player.current() {
            let merged: Vec<String> = step
                .merged_intervals()
                .iter()
                .map(|m| m.to_string())
                .collect();
            println!(
                "#{:<2} {:<20} merged = [{}]",
                player.position(),
                step.kind(),
                merged.join(", ")
            );
            println!("    {}", step.message());
        }
        if !player.tick() {
            break;
        }
    }

    if let Some(last) = player.current() {
        let layout = StepLayout::compute(last, &LaneMetrics::default());
        println!("\nResult lanes: {}", layout.merged_tracks());
        for path in &layout.paths {
            let color = palette_color(path.connection.target);
            println!(
                "  source {} -> merged {} ({}) from ({:.1}%, {:.0}px) to ({:.1}%, {:.0}px)",
                path.connection.source,
                path.connection.target,
                color.primary,
                path.from.0,
                path.from.1,
                path.to.0,
                path.to.1
            );
        }
    }
    println!("\nNarrated {} messages.", player.sink().narrated().len());
}
