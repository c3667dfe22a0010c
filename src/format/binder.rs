use serde::Deserialize;

use crate::core::value::Value;

use super::errors::FormatError;
use super::formatters::{DEFAULT_MAX_DEPTH, format_optimal_with_limit, format_value};
use super::placeholder::{Placeholder, ValueType};
use super::tokenizer::FormatSegment;

/// Knobs for a format call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormatOptions {
    /// Deepest value nesting the optimal formatter will descend into
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Binds `args` to parsed `segments` and renders the result.
pub fn format_template(segments: &[FormatSegment], args: &[Value]) -> Result<String, FormatError> {
    format_template_with(segments, args, &FormatOptions::default())
}

/// Walks the segments left to right.
///
/// Unindexed placeholders take arguments in order from an implicit cursor;
/// `%N$` placeholders read `args[N - 1]` without moving it. Arguments past
/// the cursor that no explicit index touched are rendered with the optimal
/// formatter and appended, each preceded by a single space.
pub fn format_template_with(
    segments: &[FormatSegment],
    args: &[Value],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let mut output = String::new();
    let mut cursor = 0;
    let mut referenced = vec![false; args.len()];

    for segment in segments {
        let place = match segment {
            FormatSegment::Literal(text) => {
                output.push_str(text);
                continue;
            }
            FormatSegment::Placeholder(place) => place,
        };

        let slot = match place.index {
            Some(index) => match index.checked_sub(1).filter(|slot| *slot < args.len()) {
                Some(slot) => slot,
                None => {
                    return Err(FormatError::missing_argument(
                        place.value_type,
                        index,
                        args.len(),
                    ));
                }
            },
            None => {
                if cursor >= args.len() {
                    return Err(FormatError::missing_argument(
                        place.value_type,
                        cursor + 1,
                        args.len(),
                    ));
                }
                cursor += 1;
                cursor - 1
            }
        };

        referenced[slot] = true;
        output.push_str(&format_value(&args[slot], place, options.max_depth)?);
    }

    let trailing = Placeholder::new(ValueType::Optimal);
    let mut appended = 0;
    for (slot, value) in args.iter().enumerate().skip(cursor) {
        if referenced[slot] {
            continue;
        }
        output.push(' ');
        output.push_str(&format_optimal_with_limit(value, &trailing, options.max_depth)?);
        appended += 1;
    }

    if appended > 0 {
        tracing::debug!(appended, consumed = cursor, "appended trailing arguments");
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tokenizer::parse_template;

    fn render(template: &str, args: &[Value]) -> Result<String, FormatError> {
        format_template(&parse_template(template), args)
    }

    #[test]
    fn test_literals_only() {
        assert_eq!(render("plain text", &[]).unwrap(), "plain text");
    }

    #[test]
    fn test_implicit_arguments_in_order() {
        let args = [Value::from("Ayla"), Value::from(3)];
        assert_eq!(render("%s is level %d", &args).unwrap(), "Ayla is level 3");
    }

    #[test]
    fn test_explicit_indices_leave_cursor_alone() {
        let args = [Value::from("a"), Value::from("b")];
        assert_eq!(render("%2$s %s %1$s", &args).unwrap(), "b a a");
    }

    #[test]
    fn test_missing_implicit_argument() {
        let err = render("%s and %d", &[Value::from("x")]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                value_type: ValueType::Decimal,
                position: 2,
                available: 1,
            }
        );
    }

    #[test]
    fn test_missing_explicit_argument() {
        let err = render("%3$s", &[Value::from("a")]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                value_type: ValueType::String,
                position: 3,
                available: 1,
            }
        );
    }

    #[test]
    fn test_index_zero_is_missing() {
        let segments = [FormatSegment::Placeholder(
            Placeholder::new(ValueType::String).at(0),
        )];
        let err = format_template(&segments, &[Value::from("a")]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                value_type: ValueType::String,
                position: 0,
                available: 1,
            }
        );
    }

    #[test]
    fn test_string_depth_limit_fails_like_optimal() {
        let mut nested = Value::from("x");
        for _ in 0..200 {
            nested = Value::Array(vec![nested]);
        }
        let options = FormatOptions { max_depth: 3 };
        for template in ["%s", "%f", "%o"] {
            let err = format_template_with(&parse_template(template), &[nested.clone()], &options)
                .unwrap_err();
            assert_eq!(err, FormatError::DepthExceeded { limit: 3 });
        }
    }

    #[test]
    fn test_trailing_arguments_skip_explicitly_referenced() {
        let args = [Value::from("a"), Value::from("b"), Value::from("c")];
        assert_eq!(render("%2$s", &args).unwrap(), "b a c");
    }

    #[test]
    fn test_trailing_arguments_use_optimal() {
        let args = [Value::Null, Value::from(vec![1, 2])];
        assert_eq!(render("", &args).unwrap(), " [null] [1,2]");
    }

    #[test]
    fn test_depth_limit_applies_to_trailing_arguments() {
        let nested = Value::Array(vec![Value::Array(vec![Value::from(1)])]);
        let options = FormatOptions { max_depth: 1 };
        let err = format_template_with(&parse_template("x"), &[nested], &options).unwrap_err();
        assert_eq!(err, FormatError::DepthExceeded { limit: 1 });
    }
}
