use crate::cli::{args::ParseArgs, config::resolve_template, global::GlobalArgs};
use tmplfmt::{FormatSegment, TemplateRegistry, parse_template};

pub fn handle(
    args: ParseArgs,
    _global: &GlobalArgs,
    config: &TemplateRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = resolve_template(config, &args.template, args.named)?;
    let segments = parse_template(&template);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    for segment in &segments {
        match segment {
            FormatSegment::Literal(text) if text.is_empty() => {}
            FormatSegment::Literal(text) => println!("  literal      {:?}", text),
            FormatSegment::Placeholder(place) => {
                let binding = match place.index {
                    Some(index) => format!("arg {}", index),
                    None => "next arg".to_string(),
                };
                println!(
                    "  placeholder  {:<8} {:<8} {}",
                    place.to_string(),
                    place.value_type,
                    binding
                );
            }
        }
    }

    Ok(())
}
