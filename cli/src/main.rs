mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.debug);
    let use_color: bool = print::initialize(commands.no_color);

    print::banner();
    scan::scan(&commands, use_color).await
}
