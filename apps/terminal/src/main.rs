//! # WeSplit Terminal Entry Point
//!
//! The actual setup is in lib.rs for better testability.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from the environment
//! 3. Pick the currency formatter for the resolved locale
//! 4. Create the bill session
//! 5. Read commands from stdin until `quit` or EOF

use std::process::ExitCode;

fn main() -> ExitCode {
    match wesplit_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wesplit: {err}");
            ExitCode::FAILURE
        }
    }
}
