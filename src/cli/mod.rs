mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};

use args::{ConfigAction, LogArgs, ParseArgs, RenderArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "tmplfmt")]
#[command(version)]
#[command(about = "printf-style template formatter with positional arguments and best-effort value rendering", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a template with arguments
    Render(RenderArgs),
    /// Show the segments a template parses into
    Parse(ParseArgs),
    /// Write one formatted log line to stdout
    Log(LogArgs),
    /// Inspect named templates
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment mutation; no other threads exist yet
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    config::init_tracing(&cli.global);

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Render(args) => handlers::render::handle(args, &cli.global, &registry),
        Commands::Parse(args) => handlers::parse::handle(args, &cli.global, &registry),
        Commands::Log(args) => handlers::log::handle(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &registry),
    }
}
