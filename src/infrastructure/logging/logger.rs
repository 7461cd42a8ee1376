use super::config::{LogConfig, LogFormat, RotationPolicy};
use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// File name prefix for rolled log files
pub const LOG_FILE_PREFIX: &str = "sitegenome.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger implementation using tracing
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Initialize the global subscriber.
    ///
    /// The stderr terminal layer honours `config.format`; the optional file sink under
    /// `config.log_dir` is always JSON. The returned value owns the
    /// non-blocking writer guard and must be kept alive for the process.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a subscriber is already set
    pub fn init(config: &LogConfig) -> Result<Self> {
        let default_level = parse_log_level(&config.level)?;
        let filter = || {
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy()
        };

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if let Some(ref log_dir) = config.log_dir {
            let file_appender = match config.rotation {
                RotationPolicy::Daily => rolling::daily(log_dir, LOG_FILE_PREFIX),
                RotationPolicy::Hourly => rolling::hourly(log_dir, LOG_FILE_PREFIX),
                RotationPolicy::Never => rolling::never(log_dir, LOG_FILE_PREFIX),
            };
            let (writer, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter())
                    .boxed(),
            );
        }

        if config.enable_terminal {
            layers.push(terminal_layer(config.format, filter(), io::stderr));
        }

        tracing_subscriber::registry().with(layers).try_init()?;

        tracing::debug!(
            level = %config.level,
            format = ?config.format,
            file_output = config.log_dir.is_some(),
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }
}

/// Terminal sink. The binary passes `io::stderr` so stdout carries only
/// command output.
fn terminal_layer<W>(format: LogFormat, filter: EnvFilter, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(true)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .with_filter(filter)
            .boxed(),
    }
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
