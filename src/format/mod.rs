//! Template formatting.
//!
//! A template is split into literal text and `%` directives, each directive
//! is decoded into a [`Placeholder`], and the binder renders arguments into
//! the placeholders in order.

pub mod binder;
pub mod errors;
pub mod formatters;
pub mod placeholder;
pub mod tokenizer;

pub use binder::{FormatOptions, format_template, format_template_with};
pub use errors::{FormatError, TemplateNotFoundError, find_closest_template};
pub use formatters::{
    NON_OBJECT, NOT_A_NUMBER, format_decimal, format_float, format_integer, format_object,
    format_optimal, format_optimal_with_limit, format_string, format_value,
};
pub use placeholder::{Placeholder, ValueType, Variant, parse_placeholder};
pub use tokenizer::{FormatSegment, Token, parse_template, tokenize};

use crate::core::value::Value;

/// Formats `template` with `args`.
///
/// Either the whole template renders or an error is returned; no partial
/// output escapes on failure.
///
/// # Example
///
/// ```
/// use tmplfmt::{Value, format};
///
/// let out = format("%2$s-%1$s", &[Value::from("a"), Value::from("b")]).unwrap();
/// assert_eq!(out, "b-a");
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    format_with(template, args, &FormatOptions::default())
}

/// Formats `template` with explicit [`FormatOptions`].
pub fn format_with(
    template: &str,
    args: &[Value],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    format_template_with(&parse_template(template), args, options)
}
