use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sqlite-seek")]
#[command(author, version, about = "Search the rows of a SQLite table by column values")]
pub struct Cli {
    /// Path to a SQLite database file (prompted for when omitted)
    pub database: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
