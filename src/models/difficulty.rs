use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Task,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Task => "task",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Task => "Task",
        }
    }
}

const CLASSIC_EASY: &[u32] = &[
    1, 13, 20, 21, 26, 27, 35, 53, 58, 66, 70, 88, 104, 121, 125, 136, 141, 155, 169, 206, 217,
    242, 268, 283, 344, 349, 485, 509, 704, 724,
];

const CLASSIC_HARD: &[u32] = &[
    10, 23, 25, 30, 37, 42, 51, 72, 76, 84, 124, 140, 212, 239, 295, 297,
];

/// Static lookup used to tag LeetCode problems by number.
///
/// This is a placeholder heuristic, not the platform's own classification.
/// Membership in `easy`/`hard` wins over the numeric thresholds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    #[serde(default)]
    pub easy: BTreeSet<u32>,
    #[serde(default)]
    pub hard: BTreeSet<u32>,
    #[serde(default)]
    pub easy_below: Option<u32>,
    #[serde(default)]
    pub hard_above: Option<u32>,
}

impl DifficultyTable {
    pub fn fixed(easy: &[u32], hard: &[u32]) -> Self {
        Self {
            easy: easy.iter().copied().collect(),
            hard: hard.iter().copied().collect(),
            easy_below: None,
            hard_above: None,
        }
    }

    pub fn classic() -> Self {
        Self::fixed(CLASSIC_EASY, CLASSIC_HARD)
    }

    pub fn extended() -> Self {
        Self {
            easy_below: Some(50),
            hard_above: Some(1000),
            ..Self::classic()
        }
    }

    pub fn classify(&self, number: u32) -> Difficulty {
        if self.easy.contains(&number) {
            return Difficulty::Easy;
        }
        if self.hard.contains(&number) {
            return Difficulty::Hard;
        }
        if self.easy_below.is_some_and(|limit| number < limit) {
            return Difficulty::Easy;
        }
        if self.hard_above.is_some_and(|limit| number > limit) {
            return Difficulty::Hard;
        }
        Difficulty::Medium
    }
}
