use std::path::Path;

use crate::models::{Difficulty, PlanSummary, Variant};

pub fn format_summary(summary: &PlanSummary) -> String {
    let mut lines = vec![
        format!(
            "Parsed {} weeks with {} days total.",
            summary.weeks, summary.days
        ),
        format!("Total problems found: {}", summary.problems),
    ];

    for difficulty in [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Task,
    ] {
        let n = summary.by_difficulty.get(&difficulty).copied().unwrap_or(0);
        if n > 0 {
            lines.push(format!("  {:<7} {}", difficulty.display_name(), n));
        }
    }

    lines.push(format!(
        "Total system design tasks: {} ({} bonus)",
        summary.tasks, summary.bonus_tasks
    ));
    lines.push(format!("Total weeks: {}", summary.weeks));
    lines.push(format!("Total days: {}", summary.days));
    lines.join("\n")
}

pub fn display_summary(summary: &PlanSummary) {
    println!("{}", format_summary(summary));
}

pub fn display_generated(output: &Path, variant: Variant) {
    println!();
    println!("Generated {} tracker: {}", variant.display_name(), output.display());
    println!("Open it in your browser to start tracking your progress.");
    println!("Set up GitHub Sync in the page for multi-device access.");
}
