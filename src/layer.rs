//! A [`Layer`] that writes `tracing` events through a [`Log`].
//!
//! See [`MetaLayer`] for more details.

use crate::logger::Log;
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Events from this crate are never forwarded, so a logger wired into a
/// subscriber cannot log about itself.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// A [`Layer`] that writes every `tracing` event as one record.
///
/// Levels map onto [`Severity`] as `TRACE`/`DEBUG` to `Debug`, `INFO` to
/// `Info`, `WARN` to `Warning` and `ERROR` to `Error`. The event's `message`
/// becomes the record text, and any other fields are appended in the form
/// ` | key: value`.
///
/// Write failures cannot be returned from inside a subscriber, so they are
/// reported on stderr and the event is dropped.
///
/// # Examples
///
/// ```
/// use metalog::{Logger, MetaLayer, Severity};
/// use tracing_subscriber::layer::SubscriberExt;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("traced.log");
/// let logger = Logger::new(&path, Severity::Info, true);
///
/// let subscriber = tracing_subscriber::registry().with(MetaLayer::new(logger));
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::debug!("filtered out");
///     tracing::warn!(retries = 3, "upstream is slow");
/// });
///
/// let contents = std::fs::read_to_string(&path)?;
/// assert!(contents.contains("WARNING  upstream is slow | retries: 3"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MetaLayer<L> {
    logger: L,
}

impl<L: Log> MetaLayer<L> {
    /// Wraps `logger` in a layer.
    pub fn new(logger: L) -> Self {
        MetaLayer { logger }
    }

    /// Returns the wrapped logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Unwraps the layer, returning the logger.
    pub fn into_inner(self) -> L {
        self.logger
    }
}

impl<L, S> Layer<S> for MetaLayer<L>
where
    L: Log + 'static,
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let severity = Severity::from(*metadata.level());
        if !self.logger.is_enabled(severity) {
            return;
        }

        let mut visitor = Visitor::default();
        event.record(&mut visitor);

        if let Err(e) = self.logger.log(severity, &visitor.finish()) {
            let _ = writeln!(io::stderr(), "{}: dropped event: {}", OWN_TARGET, e);
        }
    }
}

fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(OWN_TARGET)
        .map_or(false, |rest| rest.is_empty() || rest.starts_with("::"))
}

#[derive(Default)]
struct Visitor {
    message: Option<String>,
    fields: String,
}

impl Visitor {
    fn finish(self) -> String {
        let mut line = self.message.unwrap_or_default();
        line.push_str(&self.fields);
        line
    }

    fn push_field(&mut self, key: &str, value: fmt::Arguments<'_>) {
        // Writing into a `String` cannot fail.
        let _ = write!(self.fields, " | {}: {}", key, value);
    }
}

impl Visit for Visitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(value.to_owned()),
            key => self.push_field(key, format_args!("{}", value)),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(format!("{:?}", value)),
            key => self.push_field(key, format_args!("{:?}", value)),
        }
    }
}
