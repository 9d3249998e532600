mod generate;
mod summary;
mod variant_cmd;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::{Result, TrackerError};
use crate::models::config::{self, UserConfig};
use crate::models::{ParserOptions, Variant};
use crate::parser::PlanParser;

#[derive(Parser)]
#[command(name = "plantrack", version)]
#[command(about = "Generate an HTML progress tracker from a markdown study plan", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Markdown study plan to read
    pub plan: Option<PathBuf>,

    /// Generator variant (defaults to the configured one)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Where to write the HTML tracker
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the parsed plan as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// HTML-escape titles and task text
    #[arg(long)]
    pub escape: bool,

    #[command(flatten)]
    pub config: ConfigArg,
}

#[derive(Args, Clone, Default)]
pub struct ConfigArg {
    /// Alternative config file
    #[arg(long = "config", value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print plan statistics without writing a tracker
    Summary {
        plan: PathBuf,
        #[arg(long, value_enum)]
        variant: Option<Variant>,
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Show or set the default variant
    Variant {
        #[arg(value_enum)]
        variant: Option<Variant>,
        #[command(flatten)]
        config: ConfigArg,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None => generate::generate_tracker(cli.generate),
        Some(Commands::Summary {
            plan,
            variant,
            config,
        }) => summary::show_summary(&plan, variant, &config),
        Some(Commands::Variant { variant, config }) => {
            variant_cmd::handle_variant(variant, &config)
        }
    }
}

fn fail(e: TrackerError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

impl ConfigArg {
    fn resolve(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => config::get_config_path(),
        }
    }

    fn load(&self) -> UserConfig {
        match self.resolve() {
            Ok(path) => config::load_config(&path),
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                UserConfig::default()
            }
        }
    }
}

pub(crate) fn read_plan(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TrackerError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| TrackerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parser_options(variant: Variant, user_config: &UserConfig) -> ParserOptions {
    let mut options = variant.parser_options();
    if let Some(table) = &user_config.difficulty {
        options.difficulty = table.clone();
    }
    options
}

pub(crate) fn build_parser(variant: Variant, user_config: &UserConfig) -> PlanParser {
    PlanParser::new(parser_options(variant, user_config))
}
