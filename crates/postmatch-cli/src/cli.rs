//! CLI argument definitions for postmatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "postmatch",
    version,
    about = "Match returned-mail addresses to magazine subscribers",
    long_about = "Match a noisy postal address (OCR output or manual entry) to the best\n\
                  subscriber in a roster.\n\n\
                  Addresses are compared after case, accent, and punctuation folding;\n\
                  a shared postal code boosts the score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include addresses and emails in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Matching policy overrides.
#[derive(Args, Clone, Default)]
pub struct PolicyArgs {
    /// JSON file with matching policy fields to override.
    #[arg(long = "policy", value_name = "FILE", global = true)]
    pub policy_file: Option<PathBuf>,

    /// Confidence threshold a score must strictly exceed (default: 0.7).
    #[arg(long = "threshold", value_name = "SCORE", global = true)]
    pub threshold: Option<f64>,

    /// Boost added when postal codes agree (default: 0.2).
    #[arg(long = "postal-code-boost", value_name = "SCORE", global = true)]
    pub postal_code_boost: Option<f64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the subscriber matching one address.
    Match(MatchArgs),

    /// Match every line of a file against the roster.
    Batch(BatchArgs),

    /// Rank roster entries against an address.
    Rank(RankArgs),

    /// Score two addresses against each other.
    Score(ScoreArgs),

    /// Show the normalized form and extracted components of an address.
    Normalize(NormalizeArgs),

    /// List the roster and each entry's eligibility.
    Roster(RosterArgs),
}

#[derive(Args)]
pub struct RosterArgs {
    /// Subscriber CSV export (name,email,address,city,postal_code). Uses demo data when omitted.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Address to match. Read from stdin when omitted.
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,

    #[command(flatten)]
    pub roster: RosterArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct BatchArgs {
    /// File with one address per line.
    #[arg(value_name = "QUERIES")]
    pub queries: PathBuf,

    #[command(flatten)]
    pub roster: RosterArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct RankArgs {
    /// Address to rank candidates against.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    #[command(flatten)]
    pub roster: RosterArgs,

    /// Maximum number of candidates to show.
    #[arg(long = "limit", default_value_t = 5)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// First address.
    pub first: String,
    /// Second address.
    pub second: String,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Address text.
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
