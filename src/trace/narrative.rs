//! Step labels and narrated explanations.
//!
//! Every message embeds the numbers of the decision it describes so a step can
//! be read (or spoken) on its own.

use crate::interval::Interval;
use crate::language::Language;

use super::step::StepKind;

pub fn description(kind: StepKind, language: Language) -> &'static str {
    match (language, kind) {
        (Language::Zh, StepKind::Initial) => "初始化",
        (Language::Zh, StepKind::Sort) => "排序",
        (Language::Zh, StepKind::PickFirst) => "选择第一个区间",
        (Language::Zh, StepKind::CompareOverlap) => "检测到重叠",
        (Language::Zh, StepKind::Merge) => "合并区间",
        (Language::Zh, StepKind::CompareNoOverlap) => "无重叠",
        (Language::Zh, StepKind::AddAndPickNew) => "保存并切换",
        (Language::Zh, StepKind::Complete) => "完成",
        (Language::En, StepKind::Initial) => "Initialize",
        (Language::En, StepKind::Sort) => "Sort",
        (Language::En, StepKind::PickFirst) => "Pick first interval",
        (Language::En, StepKind::CompareOverlap) => "Overlap detected",
        (Language::En, StepKind::Merge) => "Merge intervals",
        (Language::En, StepKind::CompareNoOverlap) => "No overlap",
        (Language::En, StepKind::AddAndPickNew) => "Save and switch",
        (Language::En, StepKind::Complete) => "Complete",
    }
}

pub fn initial(language: Language, count: usize) -> String {
    match language {
        Language::Zh => format!(
            "开始合并区间算法。共有 {count} 个区间需要处理。算法思路：先排序，再依次合并有重叠的区间。"
        ),
        Language::En => format!(
            "Starting the merge intervals algorithm with {count} intervals to process. \
             Plan: sort first, then merge overlapping intervals one by one."
        ),
    }
}

pub fn sort(language: Language) -> String {
    match language {
        Language::Zh => "第1步：按照区间起始位置从小到大排序。\
             排序后的顺序是关键，这样能保证相邻的重叠区间一定能被检测到。\
             时间复杂度 O(n log n)。"
            .to_string(),
        Language::En => "Step 1: sort the intervals by start in ascending order. \
             After sorting, any intervals that overlap sit next to each other, \
             so one pass finds them all. Time complexity O(n log n)."
            .to_string(),
    }
}

pub fn pick_first(language: Language, current: &Interval) -> String {
    match language {
        Language::Zh => format!(
            "第2步：选择第一个区间 {current} 作为\"当前区间\"。\
             我们将用这个区间去尝试合并后续的区间。\
             如果后续区间与它重叠，就扩展右边界；如果不重叠，就保存它并切换到新区间。"
        ),
        Language::En => format!(
            "Step 2: take the first interval {current} as the \"current interval\". \
             Each following interval either overlaps it and extends its right edge, \
             or does not, in which case the current interval is saved and replaced."
        ),
    }
}

pub fn compare_overlap(language: Language, next: &Interval, current: &Interval) -> String {
    let (next_start, current_end) = (next.start(), current.end());
    match language {
        Language::Zh => format!(
            "比较：区间 {next} 的起点 {next_start} ≤ 当前区间 {current} 的终点 {current_end}，\
             判断为重叠！\
             重叠条件：current.end >= next.start。接下来需要合并这两个区间。"
        ),
        Language::En => format!(
            "Compare: interval {next} starts at {next_start} ≤ {current_end}, \
             the end of the current interval {current}, so they overlap. \
             Overlap condition: current.end >= next.start. Next, merge the two."
        ),
    }
}

pub fn merge(language: Language, before: &Interval, next: &Interval, after: &Interval) -> String {
    let (start, new_end) = (after.start(), after.end());
    let (old_end, next_end) = (before.end(), next.end());
    let grown = old_end != new_end;
    match language {
        Language::Zh => {
            let change = if grown {
                format!("右边界从 {old_end} 扩展到 {new_end}，区间变长了！")
            } else {
                format!("右边界保持 {new_end} 不变，因为新区间被完全包含。")
            };
            format!(
                "合并操作：保持左边界 {start} 不变，\
                 右边界取两者最大值 max({old_end}, {next_end}) = {new_end}。\
                 {change}合并后得到 {after}。"
            )
        }
        Language::En => {
            let change = if grown {
                format!("The right edge grows from {old_end} to {new_end}. ")
            } else {
                format!(
                    "The right edge stays at {new_end} \
                     because the new interval is fully contained. "
                )
            };
            format!(
                "Merge: keep the left edge {start}, \
                 take the larger right edge max({old_end}, {next_end}) = {new_end}. \
                 {change}The merged interval is {after}."
            )
        }
    }
}

pub fn compare_no_overlap(language: Language, next: &Interval, current: &Interval) -> String {
    let (next_start, current_end) = (next.start(), current.end());
    match language {
        Language::Zh => format!(
            "比较：区间 {next} 的起点 {next_start} > 当前区间 {current} 的终点 {current_end}，\
             两个区间之间有间隔，不重叠！不重叠条件：current.end < next.start。\
             这意味着当前区间已经无法继续扩展了，需要保存它并开始新的合并。"
        ),
        Language::En => format!(
            "Compare: interval {next} starts at {next_start} > {current_end}, \
             the end of the current interval {current}. There is a gap, so they do not overlap. \
             No-overlap condition: current.end < next.start. \
             The current interval cannot grow any further; save it and start a new one."
        ),
    }
}

pub fn add_and_pick_new(
    language: Language,
    saved: &Interval,
    current: &Interval,
    saved_count: usize,
) -> String {
    match language {
        Language::Zh => format!(
            "保存当前区间：将 {saved} 加入结果集（已完成合并，不会再变化）。\
             切换操作：选择新区间 {current} 作为新的\"当前区间\"，继续向后寻找可以合并的区间。\
             目前已完成 {saved_count} 个区间的合并。"
        ),
        Language::En => format!(
            "Save: {saved} goes into the result (it is final and will not change). \
             Switch: {current} becomes the new \"current interval\" and the scan continues. \
             {saved_count} merged interval(s) completed so far."
        ),
    }
}

pub fn complete(language: Language, input_count: usize, output_count: usize) -> String {
    match language {
        Language::Zh => format!(
            "🎉 算法完成！所有区间都已处理完毕。\
             原始 {input_count} 个区间经过排序和合并，最终得到 {output_count} 个互不重叠的区间。\
             时间复杂度：O(n log n)（排序）+ O(n)（合并）= O(n log n)。\
             空间复杂度：O(n)（存储结果）。"
        ),
        Language::En => format!(
            "🎉 Done! All intervals processed. \
             The {input_count} original intervals were sorted and merged \
             into {output_count} non-overlapping intervals. \
             Time: O(n log n) sort + O(n) merge = O(n log n). Space: O(n) for the result."
        ),
    }
}
