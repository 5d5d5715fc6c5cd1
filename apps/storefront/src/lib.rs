//! # LuxSite Storefront
//!
//! Drives one shopper session over line-oriented stdin/stdout. Every input
//! line is a command; every command gets exactly one JSON reply line.
//!
//! ## Module Organization
//! ```text
//! luxsite_storefront/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── commands.rs     ◄─── Command parsing, execution, reply DTOs
//! ├── config.rs       ◄─── Environment configuration
//! └── error.rs        ◄─── AppError (fatal) and ApiError (per command)
//! ```
//!
//! ## Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin   ──► commands, one per line ('#' lines and blanks skipped)     │
//! │  stdout  ◄── replies, one JSON object per line                          │
//! │  stderr  ◄── tracing output (RUST_LOG, default info,luxsite=debug)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use luxsite_core::{Catalog, Store};

use commands::Command;
use config::StorefrontConfig;
use error::AppError;

/// Runs the storefront until stdin closes or `quit` is read.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──► tracing-subscriber to stderr, EnvFilter     │
/// │  2. Load Configuration ──► LUXSITE_* environment variables             │
/// │  3. Load Catalog ────────► JSON file, or the built-in sample           │
/// │                            (any invalid record aborts startup)          │
/// │  4. Create Store ────────► home view, empty cart, no modal             │
/// │  5. Session Loop ────────► stdin lines → Store → stdout JSON           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(store = %config.store_name, "Starting storefront");

    let catalog = load_catalog(&config)?;
    info!(products = catalog.len(), "Catalog loaded");

    let mut store = Store::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = run_session(&mut store, &config, stdin.lock(), stdout.lock())?;

    info!(commands = handled, "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=luxsite_core=trace` - Trace the state crate only
/// - Default: `info,luxsite=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,luxsite=debug"));

    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Reads the configured catalog file, or falls back to [`Catalog::sample`].
pub fn load_catalog(config: &StorefrontConfig) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => {
            debug!(?path, "Reading catalog file");
            let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
                path: path.clone(),
                source,
            })?;
            Ok(Catalog::from_json(&json)?)
        }
        None => Ok(Catalog::sample()),
    }
}

/// Processes commands from `input` until it is exhausted or `quit`/`exit`
/// is read, writing one reply line per command to `output`.
///
/// Returns how many commands were handled, failed ones included.
pub fn run_session<R, W>(
    store: &mut Store,
    config: &StorefrontConfig,
    input: R,
    mut output: W,
) -> Result<usize, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = line.parse::<Command>();
        let quit = matches!(parsed, Ok(Command::Quit));
        let outcome = match parsed {
            Ok(command) => commands::execute(store, config, command),
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            debug!(line, %err, "command failed");
        }

        writeln!(output, "{}", commands::render(&outcome)?)?;
        output.flush()?;
        handled += 1;

        if quit {
            break;
        }
    }

    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn session(script: &str) -> (Store, Vec<serde_json::Value>) {
        let mut store = Store::new(Catalog::sample());
        let config = StorefrontConfig::default();
        let mut out = Vec::new();

        run_session(&mut store, &config, Cursor::new(script), &mut out).unwrap();

        let replies = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (store, replies)
    }

    #[test]
    fn test_one_reply_per_command() {
        let (store, replies) = session("add site-001\n\n# comment\nadd site-003\ncart\n");

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[2]["data"]["kind"], "cart");
        assert_eq!(replies[2]["data"]["subtotal"], "$28,500.00");
        assert_eq!(store.cart_count(), 2);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (store, replies) = session("view nowhere\nfly\nadd site-002\n");

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(replies[1]["error"]["code"], "INVALID_COMMAND");
        assert_eq!(replies[2]["ok"], true);
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (store, replies) = session("add site-001\nquit\nadd site-002\n");

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[1]["data"]["kind"], "state");
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_load_catalog_defaults_to_sample() {
        let catalog = load_catalog(&StorefrontConfig::default()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = StorefrontConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/luxsite/catalog.json")),
            ..StorefrontConfig::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }

    #[test]
    fn test_load_catalog_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!(
            "luxsite-invalid-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"id":"","title":"x"}]"#).unwrap();

        let config = StorefrontConfig {
            catalog_path: Some(path.clone()),
            ..StorefrontConfig::default()
        };
        let result = load_catalog(&config);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Core(_))));
    }
}
