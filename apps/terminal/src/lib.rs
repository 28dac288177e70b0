//! # WeSplit Terminal Library
//!
//! Terminal front end for WeSplit. Owns the bill session and feeds it one
//! command at a time.
//!
//! ## Module Organization
//! ```text
//! wesplit_terminal/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── bill.rs     ◄─── BillSession (owns BillState)
//! │   └── config.rs   ◄─── ConfigState (environment)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── bill.rs     ◄─── amount, type, tip, people
//! │   └── summary.rs  ◄─── show, json, listings
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply};
use state::{BillSession, ConfigError, ConfigState};

/// Errors that stop the application.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs the terminal application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,wesplit_terminal=debug, overridable with RUST_LOG  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • WESPLIT_* variables, then LC_ALL / LC_MONETARY / LANG             │
/// │                                                                         │
/// │  3. Create Session ───────────────────────────────────────────────────► │
/// │     • Currency formatter picked for the locale                          │
/// │     • Defaults: $0, 20% tip, 2 people                                   │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • One line, one command, one recomputation                          │
/// │     • Errors are printed, the session keeps its prior state             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), RunError> {
    init_tracing();

    info!("Starting WeSplit");

    let config = ConfigState::from_env()?;
    info!(locale = ?config.locale, tip = %config.default_tip, people = %config.default_people, "Configuration loaded");

    let mut session = BillSession::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock())?;

    info!("WeSplit stopped");
    Ok(())
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run_session<R, W>(session: &mut BillSession, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "WeSplit: amount in {}, type `help` for commands",
        session.currency_symbol()
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = line
            .parse::<Command>()
            .and_then(|command| commands::execute(session, command));

        match reply {
            Ok(Reply::Output(text)) => writeln!(output, "{text}")?,
            Ok(Reply::Quit) => {
                debug!("quit requested");
                break;
            }
            Err(err) => {
                warn!(%err, line = %line, "command failed");
                writeln!(output, "error {err}")?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=wesplit_terminal=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for wesplit crates
///
/// Logs go to stderr so they never mix with command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wesplit_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wesplit_core::FallbackCurrencyFormatter;

    /// Session with default config and the `$` fallback formatter.
    pub(crate) fn session() -> BillSession {
        BillSession::with_formatter(&ConfigState::default(), Box::new(FallbackCurrencyFormatter))
    }

    fn transcript(script: &str) -> String {
        let mut session = session();
        let mut out = Vec::new();
        run_session(&mut session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_transcript() {
        let out = transcript("amount 100\npeople 4\ntip 20\nshow\nquit\n");
        assert!(out.starts_with("WeSplit: amount in $"));
        assert!(out.contains("People: 4\nPer person: $30.00"));
        assert!(out.contains("Per person:  $30.00"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = transcript("people 150\nfrobnicate\namount 1.234\npeople 3\n");
        assert!(out.contains(
            "error [OUT_OF_RANGE] Number of people must be between 2 and 99, got 150"
        ));
        assert!(out.contains("error [INVALID_COMMAND] unknown command: frobnicate"));
        assert!(out.contains(
            "error [VALIDATION_ERROR] amount has invalid format: at most 2 digits after the decimal point"
        ));
        assert!(out.contains("People: 3"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = transcript("quit\namount 5\n");
        assert!(!out.contains("Amount:"));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let out = transcript("\n   \nshow\n");
        assert!(!out.contains("error"));
        assert!(out.contains("Per person:  $0.00"));
    }
}
