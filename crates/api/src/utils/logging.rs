use std::time::Duration;

use clap::ValueEnum;
use podpublish_common::{ErrorClassification, ErrorSeverity};
use podpublish_domain::PublishError;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Log output format for the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays pipeable. `level`
/// accepts anything `EnvFilter` does, e.g. `debug` or
/// `podpublish_infra=trace,info`.
pub fn init_tracing(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|err| anyhow::anyhow!("Invalid log level '{level}': {err}"))?;
    let builder =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// Failures carry the [`ErrorKind`](podpublish_domain::ErrorKind) label of
/// the underlying [`PublishError`] when there is one, and whether running the
/// command again may succeed. Warning-severity failures such as rate limits
/// log at `WARN`, everything else at `ERROR`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, failure: Option<&anyhow::Error>) {
    let duration_ms = elapsed.as_millis() as u64;

    match failure {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            let error_kind = error_label(err);
            let publish = find_publish_error(err);
            let retryable = publish.is_some_and(ErrorClassification::is_retryable);
            match publish.map(ErrorClassification::severity) {
                Some(ErrorSeverity::Info | ErrorSeverity::Warning) => warn!(
                    command,
                    duration_ms,
                    error_kind = %error_kind,
                    retryable,
                    "command_execution_failure"
                ),
                _ => error!(
                    command,
                    duration_ms,
                    error_kind = %error_kind,
                    retryable,
                    "command_execution_failure"
                ),
            }
        }
    }
}

/// The first [`PublishError`] in an error chain.
pub fn find_publish_error(err: &anyhow::Error) -> Option<&PublishError> {
    err.chain().find_map(|cause| cause.downcast_ref::<PublishError>())
}

/// Stable label for an error, suitable for logs.
pub fn error_label(err: &anyhow::Error) -> String {
    find_publish_error(err).map_or_else(|| "other".to_string(), |publish| publish.kind().to_string())
}
