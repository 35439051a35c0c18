//! Built-in example inputs and a random generator.

use rand::Rng;

use crate::interval::Interval;
use crate::language::Language;

/// A named example input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub key: &'static str,
    pub name_zh: &'static str,
    pub name_en: &'static str,
    pairs: &'static [(i32, i32)],
}

impl Preset {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Zh => self.name_zh,
            Language::En => self.name_en,
        }
    }

    /// The preset's intervals in their listed order.
    pub fn intervals(&self) -> Vec<Interval> {
        self.pairs
            .iter()
            .map(|&(start, end)| Interval::whole(start, end))
            .collect()
    }
}

pub const PRESETS: [Preset; 6] = [
    Preset {
        key: "example1",
        name_zh: "力扣示例1",
        name_en: "Example 1",
        pairs: &[(1, 3), (2, 6), (8, 10), (15, 18)],
    },
    Preset {
        key: "example2",
        name_zh: "力扣示例2",
        name_en: "Example 2",
        pairs: &[(1, 4), (4, 5)],
    },
    Preset {
        key: "example3",
        name_zh: "力扣示例3",
        name_en: "Example 3",
        pairs: &[(4, 7), (1, 4)],
    },
    Preset {
        key: "all_overlap",
        name_zh: "全部重叠",
        name_en: "All Overlap",
        pairs: &[(1, 10), (2, 6), (3, 8), (4, 12)],
    },
    Preset {
        key: "no_overlap",
        name_zh: "无重叠",
        name_en: "No Overlap",
        pairs: &[(1, 2), (3, 4), (5, 6), (7, 8)],
    },
    Preset {
        key: "complex",
        name_zh: "复杂情况",
        name_en: "Complex",
        pairs: &[(1, 4), (0, 2), (3, 5), (6, 9), (8, 10), (12, 16)],
    },
];

/// Looks up a preset by key.
pub fn preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

/// The preset loaded when nothing else was chosen.
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}

/// Draws 3 to 7 integral intervals with starts in `0..20` and lengths in
/// `1..=10`.
pub fn random_intervals<R: Rng + ?Sized>(rng: &mut R) -> Vec<Interval> {
    let count = rng.gen_range(3..=7);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..20);
            let end = start + 1 + rng.gen_range(0..10);
            Interval::whole(start, end)
        })
        .collect()
}
