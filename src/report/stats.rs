//! Display statistics derived from insight text.

use crate::constants::{SECTION_HEADING_PATTERN, WORDS_PER_MINUTE};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

fn section_heading() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(SECTION_HEADING_PATTERN).expect("section heading pattern is valid")
    })
}

/// Informational figures shown next to an analysis. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightStats {
    pub entry_count: usize,
    /// Whitespace-separated words. Empty or blank text counts 0, and leading or
    /// trailing whitespace adds nothing, unlike a plain `split(/\s+/)` count.
    pub word_count: usize,
    pub section_count: usize,
    pub read_time_minutes: usize,
}

impl InsightStats {
    /// Computes the statistics for `insights` produced from `entry_count` entries.
    ///
    /// Sections are markdown headings of level one to three that start a line
    /// after the first; a heading on the very first line is not counted.
    ///
    /// ```
    /// use diary_insights::report::InsightStats;
    ///
    /// let stats = InsightStats::compute("Intro\n## Mood\nCalm\n### Sleep\nGood", 3);
    /// assert_eq!(stats.section_count, 2);
    /// assert_eq!(stats.word_count, 7);
    /// assert_eq!(stats.read_time_minutes, 1);
    /// ```
    pub fn compute(insights: &str, entry_count: usize) -> Self {
        let word_count = insights.split_whitespace().count();
        let section_count = section_heading().find_iter(insights).count();
        let read_time_minutes = word_count.div_ceil(WORDS_PER_MINUTE);

        Self {
            entry_count,
            word_count,
            section_count,
            read_time_minutes,
        }
    }
}

impl fmt::Display for InsightStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entries analyzed: {} | Insight sections: {} | Words generated: {} | Read time: {} min",
            self.entry_count, self.section_count, self.word_count, self.read_time_minutes
        )
    }
}
