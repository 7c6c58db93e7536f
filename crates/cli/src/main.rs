//! Storefront entry point.

use std::io;
use std::process::ExitCode;

use cli::Session;
use cli::config::Config;

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    cli::init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    // 2. Build the store
    let mut store = match cli::build_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to build store");
            return ExitCode::from(e.exit_code());
        }
    };

    // 3. Run the interactive session on the console
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(
        &mut store,
        stdin.lock(),
        stdout.lock(),
        config.max_login_attempts,
    );

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session ended with an error");
            ExitCode::from(e.exit_code())
        }
    }
}
