use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::display::{display_generated, display_summary};
use crate::error::{Result, TrackerError};
use crate::models::config::UserConfig;
use crate::models::{PlanSummary, Variant, Week};
use crate::render::{HtmlRenderer, RenderOptions};

use super::{build_parser, fail, read_plan, GenerateArgs};

#[derive(Serialize)]
struct PlanDump<'a> {
    variant: Variant,
    summary: &'a PlanSummary,
    weeks: &'a [Week],
}

pub struct Settings {
    pub variant: Variant,
    pub output: PathBuf,
    pub json: Option<PathBuf>,
    pub title: String,
    pub escape: bool,
}

impl Settings {
    /// Command-line flags win over the user config, which wins over the
    /// variant's defaults.
    fn resolve(args: &GenerateArgs, user_config: &UserConfig) -> Self {
        let variant = args.variant.unwrap_or(user_config.variant);
        let output = match (&args.output, &user_config.output_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join(variant.output_file()),
            (None, None) => PathBuf::from(variant.output_file()),
        };
        let title = args
            .title
            .clone()
            .or_else(|| user_config.title.clone())
            .unwrap_or_else(|| variant.default_title().to_string());

        Self {
            variant,
            output,
            json: args.json.clone(),
            title,
            escape: args.escape,
        }
    }
}

pub fn generate_tracker(args: GenerateArgs) {
    let Some(plan) = args.plan.as_deref() else {
        eprintln!("Usage: plantrack <markdown_file>");
        eprintln!("Example: plantrack dsa100.md");
        std::process::exit(1);
    };

    let user_config = args.config.load();
    let settings = Settings::resolve(&args, &user_config);

    match write_tracker(plan, &settings, &user_config) {
        Ok(summary) => {
            display_summary(&summary);
            display_generated(&settings.output, settings.variant);
        }
        Err(e) => fail(e),
    }
}

pub(crate) fn render_tracker(
    markdown: &str,
    settings: &Settings,
    user_config: &UserConfig,
) -> (Vec<Week>, String) {
    let weeks = build_parser(settings.variant, user_config).parse(markdown);

    let options = RenderOptions {
        title: settings.title.clone(),
        views: settings.variant.views(),
        escape: settings.escape,
        sync: user_config.sync.clone(),
        generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
    };
    let html = HtmlRenderer::new(&weeks, options).generate_html();

    (weeks, html)
}

pub(crate) fn write_tracker(
    plan: &Path,
    settings: &Settings,
    user_config: &UserConfig,
) -> Result<PlanSummary> {
    let markdown = read_plan(plan)?;
    let (weeks, html) = render_tracker(&markdown, settings, user_config);
    let summary = PlanSummary::from_weeks(&weeks);

    tracing::info!(
        plan = %plan.display(),
        output = %settings.output.display(),
        weeks = summary.weeks,
        days = summary.days,
        "writing tracker"
    );
    write_file(&settings.output, &html)?;

    if let Some(json_path) = &settings.json {
        let dump = PlanDump {
            variant: settings.variant,
            summary: &summary,
            weeks: &weeks,
        };
        let contents = serde_json::to_string_pretty(&dump)?;
        write_file(json_path, &contents)?;
    }

    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TrackerError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| TrackerError::Write {
        path: path.to_path_buf(),
        source,
    })
}
