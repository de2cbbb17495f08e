use crate::sources::SizeBand;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "partner-fit",
    version,
    about = "Score companies against the HubSpot Ideal Partner Profile"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding partner-fit.toml and receiving exports
    #[arg(long, global = true, default_value = ".")]
    pub workdir: PathBuf,

    /// JSON catalog to search instead of the built-in demo companies
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Ideal Partner Profile criteria
    Criteria,
    /// List companies matching a search
    Search(SearchCommand),
    /// Score companies and print recommendations, best match first
    Analyze(AnalyzeCommand),
}

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Keywords matched against name, industry, description and specializations
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long, value_enum)]
    pub min_size: Option<SizeBand>,
}

#[derive(Args)]
pub struct SearchCommand {
    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Company names to analyze; defaults to every search result
    pub companies: Vec<String>,
    #[command(flatten)]
    pub search: SearchArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Write the analysis to .partner-fit/exports
    #[arg(long)]
    pub export: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
