//! CLI argument definitions for the catalogue inspector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "apicat",
    version,
    about = "Interface catalogue inspector - derive browser views from payloads and URLs",
    long_about = "Derive what the interface catalogue browser shows for a given URL.\n\n\
                  Reads a pre-computed JSON payload (catalogue listing or interface page),\n\
                  decodes the view state from the URL, and prints breadcrumbs, topic\n\
                  filters, and spec evolution timelines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the catalogue list, or a single catalogue, for a URL.
    Catalogues(CataloguesArgs),

    /// Show an interface's spec evolution for a URL.
    Evolution(EvolutionArgs),

    /// Apply a navigation intent to a URL and print the result.
    Navigate(NavigateArgs),
}

#[derive(Parser)]
pub struct CataloguesArgs {
    /// Catalogue listing payload (JSON).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Relative URL to view (default: the installation's catalogue list).
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,
}

#[derive(Parser)]
pub struct EvolutionArgs {
    /// Interface page payload (JSON).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Relative URL to view (default: the interface page with no flags set).
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,
}

#[derive(Parser)]
pub struct NavigateArgs {
    /// Current relative URL.
    #[arg(long = "url", value_name = "URL")]
    pub url: String,

    #[command(subcommand)]
    pub action: NavigateAction,
}

#[derive(Subcommand)]
pub enum NavigateAction {
    /// Set a query parameter to a single value.
    Set { name: String, value: String },

    /// Remove a query parameter.
    Unset { name: String },

    /// Preview the spec at a reference.
    SelectRef { reference: String },

    /// Close the spec preview.
    ClosePreview,

    /// Open the evolution panel.
    OpenEvolution,

    /// Close the evolution panel.
    CloseEvolution,

    /// Show or hide the main branch's previous versions.
    TogglePreviousVersions,

    /// Add or remove a topic from the catalogue filter.
    ToggleTopic { topic: String },

    /// Remove every topic from the catalogue filter.
    ClearTopics,
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
