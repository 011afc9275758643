use std::io::Write;

use colored::*;
use portania_common::network::result::ProbeResult;
use portania_core::{Reporter, ScanSummary};
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Decides once whether ANSI colors are written and applies it globally.
///
/// Colors stay off when `no_color` is set or stdout cannot render them.
pub fn initialize(no_color: bool) -> bool {
    let use_color: bool = !no_color && console::colors_enabled();
    colored::control::set_override(use_color);
    use_color
}

/// Writes the version header to stderr so stdout only carries results.
pub fn banner() {
    let text_content: String = format!("⟦ PORTANIA v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(text_width);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    eprintln!(
        "{}{}{}",
        "═".repeat(left).color(colors::SEPARATOR),
        text_content.color(colors::ACCENT).bold(),
        "═".repeat(right).color(colors::SEPARATOR)
    );
}

pub fn summary(summary: &ScanSummary) {
    let open: ColoredString = format!("{} open", summary.open).color(colors::OPEN).bold();
    let closed: ColoredString = format!("{} closed", summary.closed()).color(colors::CLOSED).bold();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).yellow().bold();

    eprintln!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    eprintln!(
        "{}",
        format!("Scan complete: {open}, {closed} in {total_time}").color(colors::TEXT_DEFAULT)
    );
}

/// Prints one line per probe result to stdout as it arrives.
pub struct ConsoleReporter {
    use_color: bool,
    hide_failures: bool,
    debug: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, hide_failures: bool, debug: bool) -> Self {
        Self {
            use_color,
            hide_failures,
            debug,
        }
    }

    /// The line for `result`, or `None` when it is filtered out.
    pub fn render(&self, result: &ProbeResult) -> Option<String> {
        let target = result.target();

        if result.is_reachable() {
            let line = format!("Port {} is open on host {}", target.port(), target.host());
            return Some(self.paint(line, colors::OPEN, false));
        }

        if self.hide_failures {
            return None;
        }

        let line = match result.cause() {
            Some(cause) if self.debug => {
                format!("Port {} is closed on {} : {}", target.port(), target.host(), cause)
            }
            _ => format!("Port {} is closed on {}", target.port(), target.host()),
        };
        Some(self.paint(line, colors::CLOSED, true))
    }

    fn paint(&self, line: String, color: Color, bold: bool) -> String {
        if !self.use_color {
            return line;
        }
        let colored: ColoredString = line.color(color);
        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, result: &ProbeResult) {
        if let Some(line) = self.render(result) {
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{line}");
        }
    }
}
