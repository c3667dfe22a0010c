use std::path::Path;
use tmplfmt::{TemplateRegistry, Value};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::global::GlobalArgs;

/// Installs the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-q`/`-v` pick the level.
pub fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match (global.quiet, global.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(format!("tmplfmt={}", level))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(!global.no_color),
        )
        .with(filter)
        .init();
}

/// Loads built-in, user and local templates, then the `--config` file if given.
pub fn load_registry(global: &GlobalArgs) -> Result<TemplateRegistry, Box<dyn std::error::Error>> {
    let mut registry = TemplateRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let extra = TemplateRegistry::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        registry.merge(extra);
    }

    Ok(registry)
}

/// Returns the template text, resolving it by name when `named` is set.
pub fn resolve_template(
    registry: &TemplateRegistry,
    template: &str,
    named: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    if named {
        Ok(registry.resolve(template)?.template.clone())
    } else {
        Ok(template.to_string())
    }
}

/// Turns command-line arguments into values.
pub fn parse_values(args: &[String], strings: bool) -> Vec<Value> {
    args.iter()
        .map(|arg| {
            if strings {
                Value::from(arg.as_str())
            } else {
                Value::parse_literal(arg)
            }
        })
        .collect()
}
