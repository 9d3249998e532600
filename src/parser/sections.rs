use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DesignSection, Difficulty, DsaSection, ParserOptions, Problem, Task};

use super::slug::slugify;

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[^\n]*?\*\*(DSA|SYSTEM DESIGN):[ \t]*([^\n]*?)[ \t]*\*\*[^\n]*$").unwrap()
});
static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*---+[ \t]*$").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\s+(.*?)\s*$").unwrap());
static LEETCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LC\s+(\d+):\s*(.+?)\s*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Dsa,
    Design,
}

struct Block<'a> {
    label: Label,
    title: &'a str,
    /// Byte range of the body within the day text.
    body_start: usize,
    next_label: usize,
}

fn find_blocks(text: &str) -> Vec<Block<'_>> {
    let matches: Vec<_> = LABEL.captures_iter(text).collect();
    let mut blocks = Vec::with_capacity(matches.len());

    for (i, caps) in matches.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let label = match &caps[1] {
            "DSA" => Label::Dsa,
            _ => Label::Design,
        };
        let next_label = matches
            .get(i + 1)
            .and_then(|c| c.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        blocks.push(Block {
            label,
            title: caps.get(2).map_or("", |m| m.as_str()),
            body_start: whole.end(),
            next_label,
        });
    }

    blocks
}

/// Splits `* ... 📌 Goal: ...` into the item part and the goal part.
fn split_goal<'a>(line: &'a str, goal: &Regex) -> (&'a str, Option<&'a str>) {
    match goal.find(line) {
        Some(m) => (&line[..m.start()], Some(line[m.end()..].trim())),
        None => (line, None),
    }
}

pub(super) fn goal_regex(markers: &[String]) -> Regex {
    let glyphs: Vec<String> = markers.iter().map(|g| regex::escape(g)).collect();
    let pattern = format!(r"(?:{})[ \t]*Goal:[ \t]*", glyphs.join("|"));
    Regex::new(&pattern).expect("escaped glyphs always form a valid pattern")
}

pub(super) fn parse_dsa(text: &str, options: &ParserOptions, goal: &Regex) -> DsaSection {
    let Some(block) = find_blocks(text).into_iter().find(|b| b.label == Label::Dsa) else {
        return DsaSection::default();
    };
    let body = &text[block.body_start..block.next_label];

    let mut section = DsaSection {
        title: block.title.trim().to_string(),
        ..Default::default()
    };

    for line in body.lines() {
        let (item, goal_text) = split_goal(line, goal);
        if let Some(goal_text) = goal_text {
            if section.goal.is_none() && !goal_text.is_empty() {
                section.goal = Some(goal_text.to_string());
            }
        }

        let Some(caps) = BULLET.captures(item) else {
            continue;
        };
        let entry = caps[1].trim();
        if entry.is_empty() {
            continue;
        }

        let problem = match LEETCODE.captures(entry) {
            Some(lc) => {
                let id = lc[1].to_string();
                let title = lc[2].to_string();
                // Ids too large for u32 are not real problem numbers anyway.
                let difficulty = match id.parse::<u32>() {
                    Ok(n) => options.difficulty.classify(n),
                    Err(_) => Difficulty::Medium,
                };
                let slug = slugify(&title, options.slug);
                Problem::leetcode(id, title, difficulty, &slug)
            }
            None => Problem::free_text(entry.to_string()),
        };
        section.problems.push(problem);
    }

    section
}

pub(super) fn parse_design(text: &str) -> DesignSection {
    let Some(block) = find_blocks(text)
        .into_iter()
        .find(|b| b.label == Label::Design)
    else {
        return DesignSection::default();
    };

    let rest = &text[block.body_start..];
    let end = RULE.find(rest).map_or(rest.len(), |m| m.start());
    let body = &rest[..end];

    let tasks = body
        .lines()
        .filter_map(|line| BULLET.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .map(Task::new)
        .collect();

    DesignSection {
        title: block.title.trim().to_string(),
        tasks,
    }
}
