//! HTML tracker rendering.
//!
//! The page is a fixed template with a handful of `{{...}}` placeholders. The
//! stylesheet and script are static; the only per-run input to the script is
//! the `TRACKER_CONFIG` object.

mod views;

use std::borrow::Cow;

use serde_json::json;

use crate::models::config::SyncConfig;
use crate::models::{View, Week};

const TEMPLATE: &str = include_str!("../templates/tracker.html");
const STYLES: &str = include_str!("../templates/tracker.css");
const SCRIPT: &str = include_str!("../templates/tracker.js");

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub views: &'static [View],
    /// Escape entity text. Off by default: plan authors may use inline markup.
    pub escape: bool,
    pub sync: SyncConfig,
    pub generated_at: String,
}

/// Applies the escaping policy to interpolated entity text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Text {
    escape: bool,
}

impl Text {
    pub(crate) fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}

pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub struct HtmlRenderer<'a> {
    weeks: &'a [Week],
    options: RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(weeks: &'a [Week], options: RenderOptions) -> Self {
        Self { weeks, options }
    }

    pub fn generate_html(&self) -> String {
        let text = Text {
            escape: self.options.escape,
        };

        let weeks_html: String = self
            .weeks
            .iter()
            .map(|week| views::render_week(week, self.options.views, text))
            .collect();

        tracing::debug!(
            weeks = self.weeks.len(),
            bytes = weeks_html.len(),
            "rendered tracker content"
        );

        TEMPLATE
            .replace("{{STYLES}}", STYLES)
            .replace("{{SCRIPT}}", SCRIPT)
            .replace("{{TITLE}}", &escape_html(&self.options.title))
            .replace("{{VIEW_TABS}}", &self.view_tabs())
            .replace("{{WEEK_OPTIONS}}", &self.week_options())
            .replace("{{TRACKER_CONFIG}}", &self.tracker_config())
            .replace("{{GENERATED_AT}}", &self.options.generated_at)
            .replace("{{WEEKS_CONTENT}}", &weeks_html)
    }

    fn view_tabs(&self) -> String {
        self.options
            .views
            .iter()
            .map(|view| {
                let active = if *view == View::Combined { " active" } else { "" };
                format!(
                    r#"
            <button class="view-tab{active}" data-view="{id}" onclick="switchView('{id}')">{name}</button>"#,
                    active = active,
                    id = view.as_str(),
                    name = view.display_name(),
                )
            })
            .collect()
    }

    fn week_options(&self) -> String {
        self.weeks
            .iter()
            .map(|week| {
                format!(
                    r#"
                    <option value="week{n}">Week {n}</option>"#,
                    n = week.number
                )
            })
            .collect()
    }

    fn tracker_config(&self) -> String {
        let sync = &self.options.sync;
        let views: Vec<&str> = self.options.views.iter().map(|v| v.as_str()).collect();
        let config = json!({
            "apiBase": sync.api_base.trim_end_matches('/'),
            "fileName": sync.file_name,
            "description": sync.description,
            "progressKey": format!("{}-progress", sync.storage_prefix),
            "tokenKey": format!("{}-github-token", sync.storage_prefix),
            "gistIdKey": format!("{}-gist-id", sync.storage_prefix),
            "views": views,
        });
        // `</` would close the surrounding <script> element.
        config.to_string().replace("</", "<\\/")
    }
}
