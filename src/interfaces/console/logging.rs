use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Prints only an event's fields, one event per line.
///
/// Payment notifications are meant to be read as plain console output, so
/// timestamps, levels and targets are left out.
pub struct PlainFormatter;

impl<S, N> FormatEvent<S, N> for PlainFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Payment and authorization notifications are part of the program's output,
/// so this crate's `info` events stay enabled whatever `RUST_LOG` says.
const NOTIFICATIONS: &str = "order_payment=info";

/// Installs the global subscriber writing to stdout.
///
/// `RUST_LOG` takes precedence over `default_directive` when set.
pub fn init(default_directive: &str) -> Result<(), ParseError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?
        .add_directive(NOTIFICATIONS.parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(PlainFormatter)
        .init();
    Ok(())
}
