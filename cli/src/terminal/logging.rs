use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_DIRECTIVES: &str = "warn";
const DEBUG_DIRECTIVES: &str = "warn,portania_cli=debug,portania_core=debug,portania_common=debug";

/// Writes `<symbol> [target] message`, the target only shown at debug and below.
pub struct PortaniaFormatter;

/// Symbol and paint for a level. Anything quieter than `DEBUG` shares the trace look.
fn level_style(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::ERROR => ("[-]", |s| s.red().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        _ => ("[ ]", |s| s.dimmed()),
    }
}

impl<S, N> FormatEvent<S, N> for PortaniaFormatter
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
        let (symbol, paint) = level_style(meta.level());

        write!(writer, "{} ", paint(symbol.into()))?;
        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the `--debug` default.
pub fn init_logging(debug: bool) {
    let directives: &str = if debug { DEBUG_DIRECTIVES } else { DEFAULT_DIRECTIVES };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(PortaniaFormatter)
        .try_init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
