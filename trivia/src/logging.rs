//! Console and rolling log file output, both driven by [`tracing`].

use std::path::Path;

use thiserror::Error;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
    Layer,
};


#[derive(Debug, Error)]
pub enum TracingInitializationError {
    #[error("failed to set the global tracing subscriber")]
    SubscriberAlreadySet {
        #[from]
        #[source]
        error: TryInitError,
    },
}


/// Installs the global tracing subscriber.
///
/// Events are written to the console (filtered by `console_level_filter`)
/// and to a daily-rolling `log_file_name` inside `log_file_output_directory`
/// (filtered by `log_file_level_filter`).
///
/// The returned guard flushes the non-blocking file writer when dropped,
/// so it must be kept alive until the program exits.
pub fn initialize_tracing<P>(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: P,
    log_file_name: &str,
) -> Result<WorkerGuard, TracingInitializationError>
where
    P: AsRef<Path>,
{
    let rolling_file_appender = rolling::daily(log_file_output_directory, log_file_name);
    let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(rolling_file_appender);


    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_level_filter);

    let log_file_layer = fmt::layer()
        .with_ansi(false)
        .with_thread_ids(true)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_level_filter);


    tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer)
        .try_init()?;

    Ok(guard)
}
