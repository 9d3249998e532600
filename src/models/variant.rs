use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyTable;

/// Which flavour of generator to run. The two differ only in parser
/// heuristics and how many views each day gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Extended,
}

/// The parallel renderings of a day's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Combined,
    Dsa,
    Design,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Combined => "combined",
            View::Dsa => "dsa",
            View::Design => "design",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            View::Combined => "All",
            View::Dsa => "DSA",
            View::Design => "System Design",
        }
    }

    pub fn shows_problems(&self) -> bool {
        matches!(self, View::Combined | View::Dsa)
    }

    pub fn shows_tasks(&self) -> bool {
        matches!(self, View::Combined | View::Design)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugRules {
    /// Keep non-ASCII letters and digits instead of dropping them.
    pub keep_unicode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub goal_markers: Vec<String>,
    pub difficulty: DifficultyTable,
    pub slug: SlugRules,
}

impl Variant {
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Extended => "Extended",
        }
    }

    pub fn output_file(&self) -> &'static str {
        match self {
            Variant::Classic => "100_day_leetcode_tracker.html",
            Variant::Extended => "study_plan_tracker.html",
        }
    }

    pub fn views(&self) -> &'static [View] {
        match self {
            Variant::Classic => &[View::Combined, View::Dsa],
            Variant::Extended => &[View::Combined, View::Dsa, View::Design],
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Variant::Classic => "Complete 100-Day LeetCode Tracker",
            Variant::Extended => "Study Plan Tracker",
        }
    }

    pub fn parser_options(&self) -> ParserOptions {
        match self {
            Variant::Classic => ParserOptions {
                goal_markers: vec!["📌".to_string()],
                difficulty: DifficultyTable::classic(),
                slug: SlugRules { keep_unicode: true },
            },
            Variant::Extended => ParserOptions {
                goal_markers: vec!["📌".to_string(), "🎯".to_string()],
                difficulty: DifficultyTable::extended(),
                slug: SlugRules {
                    keep_unicode: false,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_per_variant() {
        assert_eq!(Variant::Classic.views().len(), 2);
        assert_eq!(Variant::Extended.views().len(), 3);
        assert!(Variant::Classic.views().iter().all(|v| *v != View::Design));
    }

    #[test]
    fn test_extended_accepts_both_goal_glyphs() {
        let opts = Variant::Extended.parser_options();
        assert_eq!(opts.goal_markers, vec!["📌", "🎯"]);
        assert_eq!(opts.difficulty.easy_below, Some(50));
    }

    #[test]
    fn test_output_names_differ() {
        assert_ne!(Variant::Classic.output_file(), Variant::Extended.output_file());
    }
}
