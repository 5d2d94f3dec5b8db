//! Grocer entry point.
//!
//! ```bash
//! GROCER_DATA_DIR=./data RUST_LOG=info cargo run -p grocer
//! ```

use std::process::ExitCode;

use grocer::{init_tracing, run, ConfigState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ConfigState::from_env();

    // Dropping the guard flushes the file sink, so it lives until exit.
    let _log_guard = match init_tracing(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("grocer: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        store = %config.store_name,
        data_dir = %config.data_dir.display(),
        "Starting Grocer"
    );

    match run(&config).await {
        Ok(report) => {
            info!(
                loaded_snapshot = report.loaded_snapshot,
                categories = report.categories,
                products = report.products,
                revenue = %config.format_currency(report.revenue),
                files = report.written.len(),
                "Session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.code(), error = %err, "Session failed");
            ExitCode::FAILURE
        }
    }
}
