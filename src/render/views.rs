use crate::models::{Day, Problem, Task, View, Week};

use super::Text;

pub(super) fn render_week(week: &Week, views: &[View], text: Text) -> String {
    let days: String = week
        .days
        .iter()
        .enumerate()
        .map(|(i, day)| render_day(day, &item_prefix(week.number, i), views, text))
        .collect();

    format!(
        r#"
    <!-- WEEK {number} -->
    <div class="week-section" data-week="week{number}">
        <div class="week-header" onclick="toggleWeek(this)">
            {heading}
            <span class="collapse-icon">▼</span>
        </div>
        <div class="week-content">
{days}
        </div>
    </div>
"#,
        number = week.number,
        heading = text.apply(&week.heading()),
        days = days,
    )
}

/// Checkbox and input keys are built from the week and the day's position
/// within it, so they stay unique even when a week overflows into the next
/// week's day numbers.
fn item_prefix(week: u32, index: usize) -> String {
    format!("w{}-d{}", week, index + 1)
}

fn render_day(day: &Day, prefix: &str, views: &[View], text: Text) -> String {
    let header = if day.title.is_empty() {
        format!("DAY {} - {}", day.number, text.apply(&day.date))
    } else {
        format!(
            "DAY {} - {}: {}",
            day.number,
            text.apply(&day.date),
            text.apply(&day.title)
        )
    };

    let blocks: String = views
        .iter()
        .map(|&view| render_view(day, prefix, view, text))
        .collect();

    format!(
        r#"
            <!-- DAY {number} -->
            <div class="day-section" data-day="{number}">
                <div class="day-header" onclick="toggleDay(this)">
                    💥 {header}
                    <span class="collapse-icon">▼</span>
                </div>
                <div class="day-content">{blocks}
                    <div class="date-completed">
                        <label for="{prefix}-date">📅 Date Completed:</label>
                        <input type="date" id="{prefix}-date" class="date-input">
                    </div>
                </div>
            </div>"#,
        number = day.number,
        prefix = prefix,
        header = header,
        blocks = blocks,
    )
}

fn render_view(day: &Day, prefix: &str, view: View, text: Text) -> String {
    let hidden = if view == View::Combined { "" } else { " hidden" };
    let mut panels = String::new();
    if view.shows_problems() {
        panels.push_str(&dsa_panel(day, prefix, view, text));
    }
    if view.shows_tasks() {
        panels.push_str(&design_panel(day, prefix, view, text));
    }

    let grid = if view == View::Combined {
        "section-grid"
    } else {
        "section-single"
    };

    format!(
        r#"
                    <div class="day-view{hidden}" data-view="{view}">
                        <div class="{grid}">{panels}
                        </div>
                    </div>"#,
        hidden = hidden,
        view = view.as_str(),
        grid = grid,
        panels = panels,
    )
}

fn dsa_panel(day: &Day, prefix: &str, view: View, text: Text) -> String {
    let items: String = day
        .dsa
        .problems
        .iter()
        .enumerate()
        .map(|(i, p)| problem_item(prefix, i, p, view, text))
        .collect();

    let goal = match &day.dsa.goal {
        Some(goal) => format!(
            r#"
                                <div class="goal-section">
                                    <div class="goal-title">📌 Goal:</div>
                                    <div>{}</div>
                                </div>"#,
            text.apply(goal)
        ),
        None => String::new(),
    };

    format!(
        r#"
                            <div class="dsa-section">
                                <div class="section-title">🎯 DSA: {title}</div>
                                <ul class="problem-list">{items}
                                </ul>{goal}
                            </div>"#,
        title = text.apply(&day.dsa.title),
        items = items,
        goal = goal,
    )
}

fn design_panel(day: &Day, prefix: &str, view: View, text: Text) -> String {
    let items: String = day
        .design
        .tasks
        .iter()
        .enumerate()
        .map(|(i, t)| task_item(prefix, i, t, view, text))
        .collect();

    format!(
        r#"
                            <div class="system-design-section">
                                <div class="section-title">🧠 SYSTEM DESIGN: {title}</div>
                                <ul class="problem-list">{items}
                                </ul>
                            </div>"#,
        title = text.apply(&day.design.title),
        items = items,
    )
}

fn problem_item(prefix: &str, index: usize, problem: &Problem, view: View, text: Text) -> String {
    let key = format!("{}-p{}", prefix, index + 1);
    let full_label = problem.label();
    let label = text.apply(&full_label);
    let link = match &problem.url {
        Some(url) => format!(
            r#"<a href="{}" class="problem-link" target="_blank">{}</a>"#,
            url, label
        ),
        None => format!(r#"<span class="problem-link">{}</span>"#, label),
    };
    let difficulty = problem.difficulty;

    format!(
        r#"
                                    <li class="problem-item" data-item="{key}" data-difficulty="{class}">
                                        <input type="checkbox" class="problem-checkbox" data-view="{view}" data-item="{key}" onchange="onItemToggle(this)">
                                        {link}
                                        <span class="badge problem-difficulty {class}">{name}</span>
                                    </li>"#,
        key = key,
        class = difficulty.as_str(),
        view = view.as_str(),
        link = link,
        name = difficulty.display_name(),
    )
}

fn task_item(prefix: &str, index: usize, task: &Task, view: View, text: Text) -> String {
    let key = format!("{}-t{}", prefix, index + 1);
    let (kind, name) = if task.is_bonus {
        ("bonus", "Bonus")
    } else {
        ("core", "Core")
    };

    format!(
        r#"
                                    <li class="task-item" data-item="{key}" data-type="{kind}">
                                        <input type="checkbox" class="task-checkbox" data-view="{view}" data-item="{key}" onchange="onItemToggle(this)">
                                        <span class="task-text">{description}</span>
                                        <span class="badge task-type {kind}">{name}</span>
                                    </li>"#,
        key = key,
        kind = kind,
        view = view.as_str(),
        description = text.apply(&task.description),
        name = name,
    )
}
