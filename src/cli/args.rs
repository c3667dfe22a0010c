use clap::{Args, Subcommand};
use std::path::PathBuf;
use tmplfmt::LogLevel;

/// Arguments for rendering a template
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Look TEMPLATE up by name in the template registry
    #[arg(short = 'n', long)]
    pub named: bool,

    /// Pass every argument as a plain string instead of parsing literals
    #[arg(short = 's', long)]
    pub strings: bool,

    /// Nesting limit for %o rendering (overrides config)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Template text, or a template name with --named
    pub template: String,

    /// Arguments: JSON, `undefined`, `123n` big integers, or plain text
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,
}

/// Arguments for showing how a template parses
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Template text, or a template name with --named
    pub template: String,

    /// Look TEMPLATE up by name in the template registry
    #[arg(short = 'n', long)]
    pub named: bool,
}

/// Arguments for writing one log line
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Omit the timestamp prefix
    #[arg(long)]
    pub no_timestamps: bool,

    /// Lowest level written (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<LogLevel>,

    /// Pass every argument as a plain string instead of parsing literals
    #[arg(short = 's', long)]
    pub strings: bool,

    /// Level of this line: trace, debug, info, warn, error, fatal
    pub level: LogLevel,

    /// Message template
    pub template: String,

    /// Template arguments
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List named templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific template
    Show {
        /// Template name
        name: String,
    },
}
