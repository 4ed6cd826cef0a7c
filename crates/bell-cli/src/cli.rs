//! CLI argument definitions for the bell ringer tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bellringers",
    version,
    about = "Bell Ringers - standards catalog and prompt tools",
    long_about = "Inspect the standards catalog used to tag bell ringers and render\n\
                  generation prompts.\n\n\
                  The standards document is read from --standards-file, then\n\
                  $BELLRINGERS_STANDARDS_FILE, then standards/Intro_CS.md. Built-in\n\
                  CSTA standards are used when the document is missing or empty."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Standards document to read.
    #[arg(long = "standards-file", value_name = "PATH", global = true)]
    pub standards_file: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the standards catalog in display order.
    Standards(StandardsArgs),

    /// Print the description of one standard code.
    Describe(DescribeArgs),

    /// Parse a standards document and report what was found.
    Check(CheckArgs),

    /// List the topic, format and constraint options.
    Options,

    /// Pick random values for every slot that is not locked.
    Spin(SpinArgs),

    /// Render the generation prompt.
    Prompt(PromptArgs),
}

#[derive(Parser)]
pub struct StandardsArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Standard code, matched exactly (e.g. 2.3.7 or None).
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Document to check (default: the configured standards document).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SpinArgs {
    /// Lock the topic slot to this value.
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Lock the format slot to this value.
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Lock the constraint slot to this value.
    #[arg(long = "constraint", value_name = "CONSTRAINT")]
    pub constraint: Option<String>,

    /// Seed for a reproducible spin.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Render the generation prompt for the spun selection.
    #[arg(long = "prompt", conflicts_with = "json")]
    pub prompt: bool,

    /// Standard code to embed in the rendered prompt.
    #[arg(long = "standard", value_name = "CODE", requires = "prompt")]
    pub standard: Option<String>,

    /// Print JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PromptArgs {
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topic: String,

    #[arg(long = "format", value_name = "FORMAT")]
    pub format: String,

    #[arg(long = "constraint", value_name = "CONSTRAINT")]
    pub constraint: String,

    /// Standard code to embed (omit or pass None for general content).
    #[arg(long = "standard", value_name = "CODE")]
    pub standard: Option<String>,
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
