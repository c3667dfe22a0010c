use crate::cli::{
    args::RenderArgs,
    config::{parse_values, resolve_template},
    global::GlobalArgs,
};
use std::fs;
use tmplfmt::{TemplateRegistry, format_with};

pub fn handle(
    args: RenderArgs,
    _global: &GlobalArgs,
    config: &TemplateRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = resolve_template(config, &args.template, args.named)?;
    let values = parse_values(&args.args, args.strings);

    let mut options = config.settings.format_options();
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }

    let output = format_with(&template, &values, &options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, output.as_bytes())?;
    } else {
        println!("{}", output);
    }

    Ok(())
}
