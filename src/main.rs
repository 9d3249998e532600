mod cli;
mod display;
mod error;
mod models;
mod parser;
mod render;
mod telemetry;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    telemetry::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            e.print().ok();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    cli::run(cli);
}
