//! printf-style template formatting.
//!
//! ```
//! use tmplfmt::{Value, format};
//!
//! let out = format("%s has %d HP", &[Value::from("Ayla"), Value::from(12)]).unwrap();
//! assert_eq!(out, "Ayla has 12 HP");
//! ```

mod core;
mod format;
pub mod log;
pub mod prelude;

pub use crate::core::config::{Settings, TemplateConfig, TemplateRegistry};
pub use crate::core::value::{Object, Symbol, Value, number_to_string};
pub use crate::format::{
    FormatError, FormatOptions, FormatSegment, NON_OBJECT, NOT_A_NUMBER, Placeholder,
    TemplateNotFoundError, Token, ValueType, Variant, find_closest_template, format,
    format_decimal, format_float, format_integer, format_object, format_optimal,
    format_optimal_with_limit, format_string, format_template, format_template_with,
    format_value, format_with, parse_placeholder, parse_template, tokenize,
};
pub use crate::log::{LogLevel, Logger};
