//! Logging setup.
//!
//! - `PLANTRACK_LOG` sets the filter (default `warn`, e.g. `plantrack=debug`).
//! - `PLANTRACK_LOG_FORMAT=json` switches to JSON lines.
//!
//! Logs go to stderr; stdout is reserved for the run summary.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("PLANTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("PLANTRACK_LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
