//! Markdown plan parsing.
//!
//! The plan is split on `## WEEK <n>:` lines, each week on bolded
//! `MACHINE MODE: DAY <n>` markers, and each day into its DSA and
//! SYSTEM DESIGN blocks. Segments that don't match the expected headers are
//! skipped rather than reported, so malformed input only ever yields fewer
//! entities.

mod sections;
mod slug;

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Day, ParserOptions, Week};

static WEEK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## WEEK \d+:").unwrap());
static WEEK_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(.+?)\s*\((.+?)\)").unwrap());
static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(?:💥[ \t]*)?MACHINE MODE: DAY").unwrap());
static DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(\d+)[ \t]*[–-][ \t]*(.+?)[ \t]*(?:\*\*|$)").unwrap());

pub const DAYS_PER_WEEK: u32 = 7;

pub struct PlanParser {
    options: ParserOptions,
    goal: Regex,
}

impl PlanParser {
    pub fn new(options: ParserOptions) -> Self {
        let goal = sections::goal_regex(&options.goal_markers);
        Self { options, goal }
    }

    pub fn parse(&self, content: &str) -> Vec<Week> {
        let weeks: Vec<Week> = WEEK_MARKER
            .split(content)
            .skip(1)
            .zip(1..)
            .filter_map(|(segment, number)| self.parse_week(number, segment))
            .collect();

        tracing::debug!(weeks = weeks.len(), "parsed plan");
        weeks
    }

    fn parse_week(&self, number: u32, content: &str) -> Option<Week> {
        let title_line = content.trim().lines().next().unwrap_or("").trim();
        let (title, date_range) = match WEEK_TITLE.captures(title_line) {
            Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
            None => (title_line.to_string(), String::new()),
        };

        let mut days = Vec::new();
        for segment in DAY_MARKER.split(content).skip(1) {
            let position = days.len() as u32 + 1;
            let day_number = (number - 1) * DAYS_PER_WEEK + position;
            if position > DAYS_PER_WEEK {
                tracing::warn!(
                    week = number,
                    position,
                    day = day_number,
                    "week has more than {} days, day numbers overlap the next week",
                    DAYS_PER_WEEK
                );
            }
            if let Some(day) = self.parse_day(day_number, segment) {
                days.push(day);
            }
        }

        if days.is_empty() {
            tracing::debug!(week = number, "dropping week without parseable days");
            return None;
        }

        Some(Week {
            number,
            title,
            date_range,
            days,
        })
    }

    fn parse_day(&self, number: u32, content: &str) -> Option<Day> {
        let header = content.lines().next().unwrap_or("");
        let Some(caps) = DAY_HEADER.captures(header) else {
            tracing::debug!(header, "skipping day with unrecognised header");
            return None;
        };

        let info = caps[2].trim();
        let (date, title) = match info.split_once(": ") {
            Some((date, title)) => (date.trim().to_string(), title.trim().to_string()),
            None => (info.to_string(), String::new()),
        };

        Some(Day {
            number,
            date,
            title,
            dsa: sections::parse_dsa(content, &self.options, &self.goal),
            design: sections::parse_design(content),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, DifficultyTable, PlanSummary, Variant};

    fn day_block(n: u32, title: &str) -> String {
        format!(
            "**💥 MACHINE MODE: DAY {n} – Day {n}: {title}**\n\n\
             🎯 **DSA: {title}**\n\
             * LC 1: Two Sum\n\
             * LC 42: Reverse Linked List\n\
             📌 Goal: Solve both\n\n\
             🧠 **SYSTEM DESIGN: Basics {n}**\n\
             * Read the intro\n\
             * Bonus: Read the replication chapter\n\n\
             ---\n\n"
        )
    }

    fn plan(days_per_week: &[u32]) -> String {
        let mut md = String::from("# 100 Day Plan\n\nIntro text that is ignored.\n\n");
        let mut n = 1;
        for (i, &count) in days_per_week.iter().enumerate() {
            md.push_str(&format!("## WEEK {}: Focus {} (Jan {} - Jan {})\n\n", i + 1, i + 1, i * 7 + 1, i * 7 + 7));
            for _ in 0..count {
                md.push_str(&day_block(n, "Arrays"));
                n += 1;
            }
        }
        md
    }

    fn classic() -> PlanParser {
        PlanParser::new(Variant::Classic.parser_options())
    }

    #[test]
    fn test_week_and_day_counts() {
        let weeks = classic().parse(&plan(&[3, 7, 1]));
        assert_eq!(weeks.len(), 3);
        assert_eq!(
            weeks.iter().map(|w| w.days.len()).collect::<Vec<_>>(),
            vec![3, 7, 1]
        );
    }

    #[test]
    fn test_global_day_numbers() {
        let weeks = classic().parse(&plan(&[2, 3, 1]));
        for (wi, week) in weeks.iter().enumerate() {
            for (di, day) in week.days.iter().enumerate() {
                assert_eq!(day.number, wi as u32 * 7 + di as u32 + 1);
            }
        }
        assert_eq!(weeks[1].days[0].number, 8);
        assert_eq!(weeks[2].days[0].number, 15);
    }

    #[test]
    fn test_overlong_week_keeps_all_days() {
        let weeks = classic().parse(&plan(&[8, 1]));
        assert_eq!(weeks[0].days.len(), 8);
        let numbers: Vec<u32> = weeks
            .iter()
            .flat_map(|w| w.days.iter().map(|d| d.number))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 8]);
    }

    #[test]
    fn test_week_title_and_range() {
        let weeks = classic().parse(&plan(&[1]));
        assert_eq!(weeks[0].number, 1);
        assert_eq!(weeks[0].title, "Focus 1");
        assert_eq!(weeks[0].date_range, "Jan 1 - Jan 7");
    }

    #[test]
    fn test_week_title_without_range() {
        let md = format!("## WEEK 1: Graphs and more\n{}", day_block(1, "Graphs"));
        let weeks = classic().parse(&md);
        assert_eq!(weeks[0].title, "Graphs and more");
        assert_eq!(weeks[0].date_range, "");
    }

    #[test]
    fn test_day_header_fields() {
        let weeks = classic().parse(&plan(&[1]));
        let day = &weeks[0].days[0];
        assert_eq!(day.date, "Day 1");
        assert_eq!(day.title, "Arrays");
        assert_eq!(day.dsa.title, "Arrays");
        assert_eq!(day.dsa.goal.as_deref(), Some("Solve both"));
        assert_eq!(day.design.title, "Basics 1");
        assert_eq!(day.design.tasks.len(), 2);
        assert!(day.design.tasks[1].is_bonus);
    }

    #[test]
    fn test_day_missing_header_is_dropped() {
        let good = plan(&[3]);
        let broken = good.replacen("DAY 2 – Day 2: Arrays", "DAY – nothing here", 1);
        let before = classic().parse(&good);
        let after = classic().parse(&broken);
        assert_eq!(before[0].days.len(), 3);
        assert_eq!(after[0].days.len(), 2);
        assert_eq!(after[0].days[1].number, 2);
    }

    #[test]
    fn test_week_without_days_is_dropped() {
        let md = format!("## WEEK 1: Empty\nnothing\n\n{}", plan(&[1]).replace("WEEK 1", "WEEK 2"));
        let weeks = classic().parse(&md);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].number, 2);
        assert_eq!(weeks[0].days[0].number, 8);
    }

    #[test]
    fn test_no_markers_yields_empty_plan() {
        assert!(classic().parse("# Just a heading\n\n* LC 1: Two Sum\n").is_empty());
        assert!(classic().parse("").is_empty());
    }

    #[test]
    fn test_difficulty_follows_variant() {
        let md = plan(&[1]);
        let classic_weeks = classic().parse(&md);
        assert_eq!(classic_weeks[0].days[0].dsa.problems[1].difficulty, Difficulty::Hard);

        let mut opts = Variant::Classic.parser_options();
        opts.difficulty = DifficultyTable::fixed(&[1], &[]);
        let weeks = PlanParser::new(opts).parse(&md);
        let p = &weeks[0].days[0].dsa.problems[1];
        assert_eq!((p.id.as_str(), p.title.as_str()), ("42", "Reverse Linked List"));
        assert_eq!(p.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_marker_without_glyph() {
        let md = "## WEEK 1: Plain\n**MACHINE MODE: DAY 1 - Mon: Plain day**\n**DSA: Plain**\n* LC 704: Binary Search\n";
        let weeks = classic().parse(md);
        assert_eq!(weeks[0].days[0].title, "Plain day");
        assert_eq!(weeks[0].days[0].dsa.problems[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_summary_of_parsed_plan() {
        let weeks = classic().parse(&plan(&[2, 2]));
        let summary = PlanSummary::from_weeks(&weeks);
        assert_eq!(summary.weeks, 2);
        assert_eq!(summary.days, 4);
        assert_eq!(summary.problems, 8);
        assert_eq!(summary.tasks, 8);
        assert_eq!(summary.bonus_tasks, 4);
    }
}
