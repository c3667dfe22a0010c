//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use tmplfmt::prelude::*;
//!
//! let registry = TemplateRegistry::load_default().unwrap();
//! let greeting = &registry.get_template("greeting").unwrap().template;
//! assert_eq!(format(greeting, &[Value::from("Ayla")]).unwrap(), "Hello Ayla!");
//! ```

pub use crate::{
    FormatError,
    FormatOptions,
    // Logging
    LogLevel,
    Logger,
    Object,
    Symbol,
    // Config
    TemplateRegistry,
    // Values
    Value,
    // Core formatting
    format,
    format_with,
    parse_template,
};
