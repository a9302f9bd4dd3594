mod report;

use clap::{Parser, Subcommand};

pub use self::report::{ReportArgs, report};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the settlement prices of a day and print the imbalance report.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),
}
