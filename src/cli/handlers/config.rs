use crate::cli::{args::ConfigAction, global::GlobalArgs};
use tmplfmt::{FormatSegment, TemplateRegistry, parse_template};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &TemplateRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { name } => handle_show(&name, config),
    }
}

fn handle_list(json: bool, config: &TemplateRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();

    if json {
        let templates: serde_json::Map<String, serde_json::Value> = names
            .iter()
            .filter_map(|name| config.get_template(name).map(|t| (*name, t)))
            .map(|(name, t)| {
                (
                    name.to_string(),
                    serde_json::json!({
                        "template": t.template,
                        "description": t.description,
                    }),
                )
            })
            .collect();
        let output = serde_json::json!({ "templates": templates });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available templates:\n");
    for name in &names {
        if let Some(t) = config.get_template(name) {
            println!(
                "  {:<15} {:<30} {}",
                name,
                t.template,
                t.description.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn handle_show(name: &str, config: &TemplateRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let template_config = config.resolve(name)?;
    let segments = parse_template(&template_config.template);
    let placeholders = segments
        .iter()
        .filter(|s| matches!(s, FormatSegment::Placeholder(_)))
        .count();

    println!("Template: {}", name);
    println!("  Text: {}", template_config.template);
    if let Some(description) = &template_config.description {
        println!("  Description: {}", description);
    }
    println!("  Placeholders: {}", placeholders);

    Ok(())
}
