use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::EitherWriter;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Installs the global subscriber. `RUST_LOG` controls diagnostics; terminal
/// output on the print target is always let through. Terminal output goes to
/// stdout, diagnostics to stderr.
pub fn init_logging() {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Ok(directive) = format!("{PRINT_TARGET}=info").parse() {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(HerbariumFormatter)
        .with_writer(TerminalWriter::new(std::io::stdout, std::io::stderr))
        .try_init();
}

/// Routes print-target events to `out` and every other event to `err`.
pub struct TerminalWriter<O, E> {
    out: O,
    err: E,
}

impl<O, E> TerminalWriter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl<'a, O, E> MakeWriter<'a> for TerminalWriter<O, E>
where
    O: MakeWriter<'a>,
    E: MakeWriter<'a>,
{
    type Writer = EitherWriter<O::Writer, E::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        EitherWriter::A(self.out.make_writer())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.target() == PRINT_TARGET {
            EitherWriter::A(self.out.make_writer_for(meta))
        } else {
            EitherWriter::B(self.err.make_writer_for(meta))
        }
    }
}

pub struct HerbariumFormatter;

impl<S, N> FormatEvent<S, N> for HerbariumFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0.push_str(&format!("{value:?}"));
        }
    }
}
