//! Entry point: bootstrap the search service, then dispatch the HTTP
//! server.
//!
//! Exit codes: 0 after a clean server shutdown, 1 when the configuration
//! file is missing, 2 when the entry point location cannot be resolved.

use std::process::ExitCode;

use searchd::{app, bootstrap, launch, BootstrapError, LaunchSettings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let entry_point = match std::env::current_exe() {
        Ok(path) => path,
        Err(err) => {
            let err = BootstrapError::from(err);
            tracing::error!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    // Resolve, publish the environment, report, validate. The environment
    // must be fully published before the runtime spawns worker threads.
    if let Err(err) = bootstrap::prepare(&entry_point) {
        tracing::error!("{err}");
        return ExitCode::from(err.exit_code());
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to start the async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(launch::serve(LaunchSettings::default(), app::application())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("server error: {err}");
            ExitCode::FAILURE
        }
    }
}
