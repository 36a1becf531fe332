pub mod chart;
pub mod name;
pub mod trail;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "soulchart")]
#[command(about = "Numerology birth charts on the solar and lunar calendars.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output; repeat to silence informational logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the full chart for a birthday (YYYYMMDD HHMM)
    #[command(alias = "c")]
    Chart {
        birthday: String,
        /// Name as written in the passport
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        nickname: String,
    },
    /// Reduce a number to its digit trail
    #[command(alias = "t")]
    Trail { number: String },
    /// Number of a name
    #[command(alias = "n")]
    Name { name: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
