/*!
# Travelog - A Travel Journal

This file contains the main application flow: logging, argument parsing,
configuration, loading the starting data, and dispatching to the shell or a
one-shot command.

## Usage

```text
travelog [OPTIONS] [COMMAND]

Commands:
  shell    Start the interactive shell (default)
  places   List places
  drafts   List drafts
  trash    List the trash with days until permanent deletion
  show     Show one entry
  export   Print the current places and entries as JSON

Options:
  -s, --seed <SEED>              Start from this JSON snapshot instead of the built-in data
  -y, --yes                      Confirm deletions without prompting
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [possible values: text, json]
```

## Configuration

- `TRAVELOG_SEED_FILE`: Seed snapshot (overridden by `--seed`)
- `TRAVELOG_RETENTION_DAYS`: Trash retention in days (defaults to 30)
- `TRAVELOG_LOG_FORMAT`: `text` or `json` (overridden by `--log-format`)
- `TRAVELOG_ASSUME_YES`: `1` or `true` behaves like `--yes`
- `RUST_LOG`: Log filter; takes precedence over `--verbose`
*/

use chrono::Utc;
use clap::Parser;
use std::io;
use std::process;
use tracing::{debug, info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use travelog::cli::{CliArgs, Command};
use travelog::config::Config;
use travelog::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use travelog::errors::AppResult;
use travelog::ops::{run_command, run_shell, ShellOptions};
use travelog::seed::Snapshot;
use travelog::session::Session;
use uuid::Uuid;

/// Initializes structured tracing on stderr, as text or JSON.
///
/// `RUST_LOG` wins over the verbosity flag when set.
fn init_tracing(log_format: &str, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    if log_format == LOG_FORMAT_JSON {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

/// Runs the travelog application.
///
/// 1. Parses command-line arguments
/// 2. Loads configuration and applies flag overrides
/// 3. Initializes logging under a per-invocation span
/// 4. Builds the session from the seed file or the built-in data
/// 5. Runs the requested command, or the shell
///
/// # Errors
///
/// - Configuration errors (invalid retention, unknown log format)
/// - Seed errors (unreadable or malformed snapshot)
/// - Errors of a one-shot command, such as an unknown entry id
fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    let mut config = Config::load()?;
    if let Some(seed) = &args.seed {
        config.seed_file = Some(seed.clone());
    }
    if let Some(log_format) = &args.log_format {
        config.log_format = log_format.clone();
    }
    config.assume_yes |= args.yes;
    config.validate()?;

    init_tracing(&config.log_format, args.verbose);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting travelog");
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let snapshot = match &config.seed_file {
        Some(path) => Snapshot::from_file(path)?,
        None => Snapshot::builtin(),
    };
    let mut session = Session::new(snapshot, config.retention()?);

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let options = ShellOptions {
                assume_yes: config.assume_yes,
                now: None,
            };
            run_shell(&mut session, io::stdin().lock(), io::stdout().lock(), &options)?;
        }
        command => {
            run_command(&mut session, &command, &mut io::stdout().lock(), Utc::now())?;
        }
    }

    info!("Finished");
    Ok(())
}
