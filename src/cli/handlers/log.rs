use crate::cli::{args::LogArgs, config::parse_values, global::GlobalArgs};
use std::io;
use tmplfmt::{Logger, TemplateRegistry};

pub fn handle(
    args: LogArgs,
    _global: &GlobalArgs,
    config: &TemplateRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &config.settings;
    let values = parse_values(&args.args, args.strings);

    let mut logger = Logger::new(io::stdout().lock())
        .with_level(args.min_level.unwrap_or_else(|| settings.log_level()))
        .with_timestamps(settings.timestamps() && !args.no_timestamps)
        .with_options(settings.format_options());

    logger.log(args.level, &args.template, &values)?;

    Ok(())
}
