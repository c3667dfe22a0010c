use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args)]
pub struct GlobalArgs {
    /// Extra template config merged over the built-in and user files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Suppress warnings
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print diagnostics to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
