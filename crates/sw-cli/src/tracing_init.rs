use std::fmt::{self as stdfmt, Write as _};
use std::path::Path;

use anyhow::Result;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use sw_config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Compact stderr formatter: `LEVEL [domain] message key=value ...`.
///
/// No timestamp; the CLI is short-lived and diagnostics go to the same stream.
struct DomainPrefix;

impl<S, N> FormatEvent<S, N> for DomainPrefix
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        let ansi = writer.has_ansi_escapes();
        let level = *event.metadata().level();
        if ansi {
            let color = match level {
                Level::ERROR => "31",
                Level::WARN => "33",
                Level::INFO => "32",
                Level::DEBUG => "34",
                Level::TRACE => "35",
            };
            write!(writer, "\x1b[{color}m{level:>5}\x1b[0m ")?;
        } else {
            write!(writer, "{level:>5} ")?;
        }

        let mut fields = FieldSplitter::default();
        event.record(&mut fields);
        if let Some(domain) = &fields.domain {
            write!(writer, "[{domain}] ")?;
        }
        write!(writer, "{}", fields.message)?;
        if !fields.rest.is_empty() {
            write!(writer, " {}", fields.rest)?;
        }
        writeln!(writer)
    }
}

#[derive(Default)]
struct FieldSplitter {
    domain: Option<String>,
    message: String,
    rest: String,
}

impl Visit for FieldSplitter {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "domain" => self.domain = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => self.push(name, format_args!("{value:?}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn stdfmt::Debug) {
        match field.name() {
            "domain" => self.domain = Some(format!("{value:?}").trim_matches('"').to_string()),
            "message" => self.message = format!("{value:?}"),
            name => self.push(name, format_args!("{value:?}")),
        }
    }
}

impl FieldSplitter {
    fn push(&mut self, name: &str, value: stdfmt::Arguments<'_>) {
        if !self.rest.is_empty() {
            self.rest.push(' ');
        }
        write!(&mut self.rest, "{name}={value}").ok();
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(EnvFilter::from_default_env());
    }
    let directives = config.filter_directives();
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. When `config.file` is set a
/// second layer writes to that file (relative paths resolve against
/// `base_dir`); hold the returned guard until exit so buffered lines flush.
pub fn init_tracing(config: &LoggingConfig, base_dir: &Path) -> Result<Option<WorkerGuard>> {
    let json = config.format == LogFormat::Json;
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let stderr = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(build_filter(config)?)
            .boxed()
    } else {
        fmt::layer()
            .event_format(DomainPrefix)
            .with_writer(std::io::stderr)
            .with_filter(build_filter(config)?)
            .boxed()
    };
    layers.push(stderr);

    let guard = match &config.file {
        Some(file) => {
            let path = base_dir.join(file);
            let dir = path.parent().unwrap_or(base_dir);
            std::fs::create_dir_all(dir)?;
            let name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = if json {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(build_filter(config)?)
                    .boxed()
            } else {
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(build_filter(config)?)
                    .boxed()
            };
            layers.push(layer);
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(guard)
}
