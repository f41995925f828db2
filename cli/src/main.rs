mod commands;
mod input;
mod signal;
mod terminal;

use commands::{CommandLine, Commands, analyze, emit};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    match commands.command {
        Commands::Analyze { sweep } => {
            print::banner(commands.no_banner, commands.quiet);
            analyze::analyze(&sweep, commands.quiet)
        }
        Commands::Emit { sweep, threshold } => emit::emit(&sweep, threshold, commands.quiet),
    }
}
