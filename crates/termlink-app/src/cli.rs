use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "termlink", version, about = "Query a multilingual terminology repository")]
pub struct Cli {
    /// JSON config file; defaults plus environment overrides when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Account descriptor (<Account><User Url=".." Type="Basic"/></Account>)
    #[arg(long, global = true)]
    pub account: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every locale the repository supports
    Languages,
    /// List target locales available for a source locale
    Targets { source: String },
    /// Best single match for a text
    Translate(LookupArgs),
    /// Ranked candidates for a text
    Suggest {
        #[command(flatten)]
        lookup: LookupArgs,
        /// Maximum number of suggestions
        #[arg(long)]
        max: Option<usize>,
    },
    /// Describe the metadata fields attached to results
    Fields,
    /// Write a provider logo to a file
    Logo {
        /// translate-standard or suggest-standard
        style: String,
        #[arg(long, short)]
        out: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    pub text: String,
}
