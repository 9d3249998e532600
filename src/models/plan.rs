use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// LeetCode number, empty for free-text items.
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: Option<String>,
}

impl Problem {
    pub fn leetcode(id: String, title: String, difficulty: Difficulty, slug: &str) -> Self {
        let url = Some(format!("https://leetcode.com/problems/{}/", slug));
        Self {
            id,
            title,
            difficulty,
            url,
        }
    }

    pub fn free_text(title: String) -> Self {
        Self {
            id: String::new(),
            title,
            difficulty: Difficulty::Task,
            url: None,
        }
    }

    pub fn label(&self) -> String {
        if self.id.is_empty() {
            self.title.clone()
        } else {
            format!("LC {}: {}", self.id, self.title)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub is_bonus: bool,
}

impl Task {
    pub fn new(description: String) -> Self {
        let is_bonus = description.starts_with("Bonus:");
        Self {
            description,
            is_bonus,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaSection {
    pub title: String,
    pub problems: Vec<Problem>,
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSection {
    pub title: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub number: u32,
    pub date: String,
    pub title: String,
    pub dsa: DsaSection,
    pub design: DesignSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub number: u32,
    pub title: String,
    pub date_range: String,
    pub days: Vec<Day>,
}

impl Week {
    pub fn heading(&self) -> String {
        if self.date_range.is_empty() {
            format!("WEEK {}: {}", self.number, self.title)
        } else {
            format!("WEEK {}: {} ({})", self.number, self.title, self.date_range)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub weeks: usize,
    pub days: usize,
    pub problems: usize,
    pub tasks: usize,
    pub bonus_tasks: usize,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl PlanSummary {
    pub fn from_weeks(weeks: &[Week]) -> Self {
        let mut summary = PlanSummary {
            weeks: weeks.len(),
            ..Default::default()
        };

        for day in weeks.iter().flat_map(|w| &w.days) {
            summary.days += 1;
            summary.problems += day.dsa.problems.len();
            summary.tasks += day.design.tasks.len();
            summary.bonus_tasks += day.design.tasks.iter().filter(|t| t.is_bonus).count();
            for problem in &day.dsa.problems {
                *summary.by_difficulty.entry(problem.difficulty).or_insert(0) += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(number: u32, problems: Vec<Problem>, tasks: Vec<Task>) -> Day {
        Day {
            number,
            date: String::new(),
            title: String::new(),
            dsa: DsaSection {
                problems,
                ..Default::default()
            },
            design: DesignSection {
                tasks,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_bonus_prefix() {
        assert!(Task::new("Bonus: Read the replication chapter".to_string()).is_bonus);
        assert!(!Task::new("Read about Bonus: stuff".to_string()).is_bonus);
        assert!(!Task::new("bonus: lowercase".to_string()).is_bonus);
    }

    #[test]
    fn test_problem_label() {
        let p = Problem::leetcode("1".into(), "Two Sum".into(), Difficulty::Easy, "two-sum");
        assert_eq!(p.label(), "LC 1: Two Sum");
        assert_eq!(p.url.as_deref(), Some("https://leetcode.com/problems/two-sum/"));

        let free = Problem::free_text("Review notes".into());
        assert_eq!(free.label(), "Review notes");
        assert_eq!(free.difficulty, Difficulty::Task);
        assert!(free.url.is_none());
    }

    #[test]
    fn test_summary_counts() {
        let weeks = vec![Week {
            number: 1,
            title: "Basics".into(),
            date_range: String::new(),
            days: vec![
                day(
                    1,
                    vec![
                        Problem::leetcode("1".into(), "Two Sum".into(), Difficulty::Easy, "two-sum"),
                        Problem::free_text("Warmup".into()),
                    ],
                    vec![Task::new("Bonus: extra".into()), Task::new("Read".into())],
                ),
                day(2, vec![], vec![Task::new("Read more".into())]),
            ],
        }];

        let summary = PlanSummary::from_weeks(&weeks);
        assert_eq!(summary.weeks, 1);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.problems, 2);
        assert_eq!(summary.tasks, 3);
        assert_eq!(summary.bonus_tasks, 1);
        assert_eq!(summary.by_difficulty.get(&Difficulty::Easy), Some(&1));
        assert_eq!(summary.by_difficulty.get(&Difficulty::Task), Some(&1));
    }

    #[test]
    fn test_week_heading() {
        let mut week = Week {
            number: 2,
            title: "Trees".into(),
            date_range: "Jan 8 - Jan 14".into(),
            days: vec![],
        };
        assert_eq!(week.heading(), "WEEK 2: Trees (Jan 8 - Jan 14)");
        week.date_range.clear();
        assert_eq!(week.heading(), "WEEK 2: Trees");
    }
}
