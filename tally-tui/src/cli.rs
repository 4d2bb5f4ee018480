use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Terminal time tracker: log hours against projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the time tracker (the default)
    Run {
        /// Start with no projects or entries instead of the demo data
        #[arg(long)]
        empty: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
