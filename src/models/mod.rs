pub mod config;
pub mod difficulty;
pub mod plan;
pub mod variant;

pub use difficulty::{Difficulty, DifficultyTable};
pub use plan::{Day, DesignSection, DsaSection, PlanSummary, Problem, Task, Week};
pub use variant::{ParserOptions, SlugRules, Variant, View};
