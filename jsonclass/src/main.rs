mod commands;
mod config;
mod error;
mod input;
mod logging;

use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_or_exit();
    logging::init(cli.verbose);
    cli.run()
}
