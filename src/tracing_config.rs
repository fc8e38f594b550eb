use std::{env, error::Error, io};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, LogLevel};

const LOG_FORMAT_VAR: &str = "DEVAUDIO_LOG_FORMAT";
const DAYS_TO_KEEP: usize = 7;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn env_filter_or(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

fn json_format() -> bool {
    env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json")
}

/// JSON when DEVAUDIO_LOG_FORMAT is "json", compact text otherwise
fn output_layer<W>(writer: W, ansi: bool, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json_format() {
        fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    }
}

/// Initialize tracing for one-shot CLI commands
///
/// Stderr only shows warnings unless RUST_LOG says otherwise, keeping command
/// output clean. Everything at `level` also goes to a daily rolling file in
/// the devaudio log directory. Both outputs switch to JSON when
/// DEVAUDIO_LOG_FORMAT is "json".
///
/// The returned guard flushes the file writer when dropped and must be held
/// until the command finishes.
///
/// # Errors
/// Returns error if the log directory cannot be created or a global
/// subscriber is already installed
pub fn init_cli_mode(level: LogLevel) -> Result<WorkerGuard, Box<dyn Error>> {
    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("devaudio")
        .filename_suffix("log")
        .build(&log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(vec![
            output_layer(io::stderr, true, env_filter_or(LogLevel::Warn)),
            output_layer(non_blocking, false, EnvFilter::new(level.as_filter())),
        ])
        .try_init()?;

    Ok(guard)
}
