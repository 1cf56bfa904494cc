//! Subscriber setup for the binary.
//!
//! Outside GitHub Actions events go to stderr through the compact fmt layer.
//! Inside a runner they are rendered as workflow commands so warnings and
//! errors show up as annotations on the run.

use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::{EnvFilter, fmt as ts_fmt, prelude::*};

use crate::error::{Error, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `verbose` is on.
pub fn init(verbose: bool, in_actions: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| Error::Logging(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if in_actions {
        registry.with(WorkflowCommandLayer::new()).try_init()
    } else {
        registry
            .with(
                ts_fmt::layer()
                    .with_target(false)
                    .with_ansi(io::stderr().is_terminal())
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init()
    };
    installed.map_err(|e| Error::Logging(e.to_string()))
}

/// Escape a workflow command payload.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Render one log line as a workflow command.
///
/// Info lines are printed as-is; the runner has no command for them.
pub fn workflow_command(level: Level, message: &str) -> String {
    let command = match level {
        Level::ERROR => "error",
        Level::WARN => "warning",
        Level::INFO => return message.to_string(),
        Level::DEBUG | Level::TRACE => "debug",
    };
    format!("::{command}::{}", escape_data(message))
}

/// Layer that writes every event as a workflow command line.
pub struct WorkflowCommandLayer<W = fn() -> io::Stdout> {
    make_writer: W,
}

impl WorkflowCommandLayer {
    pub fn new() -> Self {
        Self {
            make_writer: io::stdout,
        }
    }
}

impl Default for WorkflowCommandLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> WorkflowCommandLayer<W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    pub fn with_writer(make_writer: W) -> Self {
        Self { make_writer }
    }
}

impl<S, W> Layer<S> for WorkflowCommandLayer<W>
where
    S: Subscriber,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let line = workflow_command(*event.metadata().level(), &visitor.finish());
        // Nowhere to report a failed log write.
        let _ = writeln!(self.make_writer.make_writer(), "{line}");
    }
}

/// Collects the `message` field and appends the rest as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}
