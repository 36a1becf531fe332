mod commands;
mod terminal;

use commands::{CommandLine, Commands, chart, name, trail};
use soulchart_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        json: commands.json,
    };

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    match commands.command {
        Commands::Chart {
            birthday,
            name,
            nickname,
        } => {
            print::header("building chart", &cfg);
            chart::chart(&name, &nickname, &birthday, &cfg)
        }
        Commands::Trail { number } => {
            print::header("life password", &cfg);
            trail::trail(&number, &cfg)
        }
        Commands::Name { name } => {
            print::header("name number", &cfg);
            name::name(&name, &cfg)
        }
    }
}
