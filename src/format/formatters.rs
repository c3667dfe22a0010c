//! Per-type rendering of a bound argument.
//!
//! Every formatter accepts any [`Value`]. Values outside a formatter's
//! domain render as a sentinel (`NaN`, `[Non-Object]`) instead of failing.
//! Width, precision and flags are accepted on numeric placeholders but do
//! not change their output.

use crate::core::value::{Object, Value, number_to_string};

use super::errors::FormatError;
use super::placeholder::{Placeholder, ValueType};

/// Sentinel for values a numeric formatter cannot represent.
pub const NOT_A_NUMBER: &str = "NaN";

/// Sentinel for non-structured input to the object formatter.
pub const NON_OBJECT: &str = "[Non-Object]";

/// Default nesting limit for [`format_optimal`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Renders `value` with the formatter selected by the placeholder's type.
pub fn format_value(
    value: &Value,
    place: &Placeholder,
    max_depth: usize,
) -> Result<String, FormatError> {
    let text = match place.value_type {
        ValueType::Optimal => return format_optimal_with_limit(value, place, max_depth),
        ValueType::Object => format_object(value, place),
        ValueType::Decimal => format_decimal(value, place),
        ValueType::Float => format_float(value, place, max_depth)?,
        ValueType::Integer => format_integer(value, place),
        ValueType::String => format_string(value, place, max_depth)?,
    };
    Ok(text)
}

/// `%d`: numbers and big integers in base 10.
pub fn format_decimal(value: &Value, _place: &Placeholder) -> String {
    match value {
        Value::Number(n) => number_to_string(*n),
        Value::BigInt(big) => big.to_str_radix(10),
        _ => NOT_A_NUMBER.to_string(),
    }
}

/// `%f`: unary-plus coercion, then default number rendering.
pub fn format_float(
    value: &Value,
    _place: &Placeholder,
    max_depth: usize,
) -> Result<String, FormatError> {
    let n = value
        .to_number_within(max_depth)
        .ok_or(FormatError::DepthExceeded { limit: max_depth })?;
    Ok(number_to_string(n))
}

/// `%i`: only mathematical integers render.
pub fn format_integer(value: &Value, _place: &Placeholder) -> String {
    match value {
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 => number_to_string(*n),
        Value::BigInt(big) => big.to_str_radix(10),
        _ => NOT_A_NUMBER.to_string(),
    }
}

/// `%s`: string coercion, cut to `length` characters, then left-padded
/// with spaces.
///
/// The two fields are a max width and a min width here, not printf's
/// width/precision pair. The padding is `precision` minus the character
/// count of the whole coerced text, so a cut never adds padding.
pub fn format_string(
    value: &Value,
    place: &Placeholder,
    max_depth: usize,
) -> Result<String, FormatError> {
    let text = value
        .coerce_string_within(max_depth)
        .ok_or(FormatError::DepthExceeded { limit: max_depth })?;
    let max_width = place.length;
    let min_width = place.precision.unwrap_or(0);

    let pad = min_width.saturating_sub(text.chars().count());
    let truncated: String = match max_width {
        Some(max) => text.chars().take(max).collect(),
        None => text,
    };

    Ok(format!("{}{}", " ".repeat(pad), truncated))
}

/// `%O`: the own property names of a structured value, one per line.
pub fn format_object(value: &Value, _place: &Placeholder) -> String {
    match value {
        Value::Object(object) => braced(object.field_names()),
        Value::Array(items) => {
            let indices: Vec<String> = (0..items.len()).map(|i| i.to_string()).collect();
            braced(indices.iter().map(String::as_str).chain(["length"]))
        }
        _ => NON_OBJECT.to_string(),
    }
}

fn braced<'a>(names: impl Iterator<Item = &'a str>) -> String {
    format!("{{{}}}", names.collect::<Vec<_>>().join(",\n"))
}

/// `%o`: best-effort rendering of any value, with the default depth limit.
pub fn format_optimal(value: &Value, place: &Placeholder) -> Result<String, FormatError> {
    format_optimal_with_limit(value, place, DEFAULT_MAX_DEPTH)
}

/// `%o` with an explicit nesting limit.
///
/// Each array level and each primitive-hook unwrap counts as one level of
/// depth. Exceeding `max_depth` fails the whole format call.
pub fn format_optimal_with_limit(
    value: &Value,
    place: &Placeholder,
    max_depth: usize,
) -> Result<String, FormatError> {
    optimal_at(value, place, 0, max_depth)
}

fn optimal_at(
    value: &Value,
    place: &Placeholder,
    depth: usize,
    max_depth: usize,
) -> Result<String, FormatError> {
    if depth > max_depth {
        return Err(FormatError::DepthExceeded { limit: max_depth });
    }

    let text = match value {
        Value::Undefined => "[undefined]".to_string(),
        Value::Null => "[null]".to_string(),
        Value::BigInt(big) => big.to_str_radix(10),
        Value::Symbol(symbol) => match &symbol.key {
            Some(key) => format!("[Symbol {}]", key),
            None => "[Local Symbol]".to_string(),
        },
        Value::Callable(name) => name.clone(),
        Value::Array(items) => {
            let rendered = items
                .iter()
                .map(|item| optimal_at(item, place, depth + 1, max_depth))
                .collect::<Result<Vec<_>, _>>()?;
            format!("[{}]", rendered.join(","))
        }
        Value::Object(object) => optimal_object(object, place, depth, max_depth)?,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => value.coerce_string(),
    };

    Ok(text)
}

fn optimal_object(
    object: &Object,
    place: &Placeholder,
    depth: usize,
    max_depth: usize,
) -> Result<String, FormatError> {
    if let Some(display) = &object.display {
        return Ok(display.clone());
    }

    if let Some(primitive) = &object.primitive {
        let inner = optimal_at(primitive, place, depth + 1, max_depth)?;
        return Ok(format!("{{{}}}", inner));
    }

    Ok(format!(
        "{}={}",
        object.class.as_deref().unwrap_or(""),
        braced(object.field_names())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Symbol;

    fn place(value_type: ValueType) -> Placeholder {
        Placeholder::new(value_type)
    }

    #[test]
    fn test_decimal() {
        let p = place(ValueType::Decimal);
        assert_eq!(format_decimal(&Value::from(42), &p), "42");
        assert_eq!(format_decimal(&Value::from(-1.25), &p), "-1.25");
        assert_eq!(format_decimal(&Value::from("42"), &p), NOT_A_NUMBER);
        assert_eq!(format_decimal(&Value::Null, &p), NOT_A_NUMBER);
    }

    #[test]
    fn test_decimal_ignores_width_and_flags() {
        let p = Placeholder::new(ValueType::Decimal)
            .with_length(8)
            .with_precision(3);
        assert_eq!(format_decimal(&Value::from(7), &p), "7");
    }

    #[test]
    fn test_float_coerces() {
        let p = place(ValueType::Float);
        let float = |value: Value| format_float(&value, &p, DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(float(Value::from(2.5)), "2.5");
        assert_eq!(float(Value::from(" 3.75 ")), "3.75");
        assert_eq!(float(Value::Bool(true)), "1");
        assert_eq!(float(Value::Null), "0");
        assert_eq!(float(Value::from("abc")), NOT_A_NUMBER);
        assert_eq!(float(Value::Undefined), NOT_A_NUMBER);
    }

    #[test]
    fn test_float_depth_limit() {
        let p = place(ValueType::Float);
        let nested = Value::Array(vec![Value::Array(vec![Value::from(8)])]);
        assert_eq!(format_float(&nested, &p, 2).unwrap(), "8");
        assert_eq!(
            format_float(&nested, &p, 1),
            Err(FormatError::DepthExceeded { limit: 1 })
        );
    }

    #[test]
    fn test_integer() {
        let p = place(ValueType::Integer);
        assert_eq!(format_integer(&Value::from(3), &p), "3");
        assert_eq!(format_integer(&Value::from(3.0), &p), "3");
        assert_eq!(format_integer(&Value::from(3.5), &p), NOT_A_NUMBER);
        assert_eq!(format_integer(&Value::Number(f64::INFINITY), &p), NOT_A_NUMBER);
        assert_eq!(format_integer(&Value::from("3"), &p), NOT_A_NUMBER);
        let big: num_bigint::BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            format_integer(&Value::BigInt(big), &p),
            "123456789012345678901234567890"
        );
    }

    fn string(value: &str, p: &Placeholder) -> String {
        format_string(&Value::from(value), p, DEFAULT_MAX_DEPTH).unwrap()
    }

    #[test]
    fn test_string_plain() {
        let p = place(ValueType::String);
        assert_eq!(string("hi", &p), "hi");
        assert_eq!(format_string(&Value::from(12), &p, 8).unwrap(), "12");
        assert_eq!(format_string(&Value::Undefined, &p, 8).unwrap(), "undefined");
    }

    #[test]
    fn test_string_truncates_to_length() {
        let p = place(ValueType::String).with_length(3);
        assert_eq!(string("Strength", &p), "Str");
        assert_eq!(string("Dx", &p), "Dx");
    }

    #[test]
    fn test_string_pads_to_precision() {
        let p = place(ValueType::String).with_precision(6);
        assert_eq!(string("Wis", &p), "   Wis");
        assert_eq!(string("Charisma", &p), "Charisma");
    }

    #[test]
    fn test_string_pad_measures_untruncated_text() {
        let p = place(ValueType::String).with_length(3).with_precision(5);
        assert_eq!(string("Strength", &p), "Str");
        assert_eq!(string("Wisd", &p), " Wis");
        assert_eq!(string("Dx", &p), "   Dx");

        // length < precision < text length: the cut text gets no padding
        let p = place(ValueType::String).with_length(2).with_precision(5);
        assert_eq!(string("Stealth", &p), "St");
    }

    #[test]
    fn test_string_counts_characters_not_bytes() {
        let p = place(ValueType::String).with_length(2).with_precision(4);
        assert_eq!(string("éàü", &p), " éà");
    }

    #[test]
    fn test_string_depth_limit() {
        let p = place(ValueType::String);
        let mut nested = Value::from("deep");
        for _ in 0..200 {
            nested = Value::Array(vec![nested]);
        }
        assert_eq!(
            format_string(&nested, &p, 3),
            Err(FormatError::DepthExceeded { limit: 3 })
        );
        assert_eq!(format_string(&nested, &p, 200).unwrap(), "deep");
    }

    #[test]
    fn test_object_lists_field_names() {
        let p = place(ValueType::Object);
        let hero = Object::new("Hero").field("name", "Ayla").field("level", 3);
        assert_eq!(format_object(&Value::from(hero), &p), "{name,\nlevel}");
        assert_eq!(format_object(&Value::from(Object::default()), &p), "{}");
    }

    #[test]
    fn test_object_on_array_lists_indices() {
        let p = place(ValueType::Object);
        assert_eq!(
            format_object(&Value::from(vec!["a", "b"]), &p),
            "{0,\n1,\nlength}"
        );
    }

    #[test]
    fn test_object_sentinel() {
        let p = place(ValueType::Object);
        assert_eq!(format_object(&Value::from(5), &p), NON_OBJECT);
        assert_eq!(format_object(&Value::Null, &p), NON_OBJECT);
        assert_eq!(format_object(&Value::from("text"), &p), NON_OBJECT);
    }

    #[test]
    fn test_optimal_scalars() {
        let p = place(ValueType::Optimal);
        assert_eq!(format_optimal(&Value::Undefined, &p).unwrap(), "[undefined]");
        assert_eq!(format_optimal(&Value::Null, &p).unwrap(), "[null]");
        assert_eq!(format_optimal(&Value::from(7), &p).unwrap(), "7");
        assert_eq!(format_optimal(&Value::Bool(false), &p).unwrap(), "false");
        assert_eq!(format_optimal(&Value::from("a"), &p).unwrap(), "a");
        assert_eq!(
            format_optimal(&Value::Callable("rollDice".to_string()), &p).unwrap(),
            "rollDice"
        );
    }

    #[test]
    fn test_optimal_symbols() {
        let p = place(ValueType::Optimal);
        assert_eq!(
            format_optimal(&Value::from(Symbol::registered("hp")), &p).unwrap(),
            "[Symbol hp]"
        );
        assert_eq!(
            format_optimal(&Value::from(Symbol::local()), &p).unwrap(),
            "[Local Symbol]"
        );
    }

    #[test]
    fn test_optimal_array_recurses() {
        let p = place(ValueType::Optimal);
        let value = Value::Array(vec![Value::from(1), Value::from("a"), Value::Null]);
        assert_eq!(format_optimal(&value, &p).unwrap(), "[1,a,[null]]");

        let nested = Value::Array(vec![Value::from(vec![1, 2]), Value::Array(vec![])]);
        assert_eq!(format_optimal(&nested, &p).unwrap(), "[[1,2],[]]");
    }

    #[test]
    fn test_optimal_object_hooks() {
        let p = place(ValueType::Optimal);
        let shown = Object::new("Dice").with_display("2d6").with_primitive(7);
        assert_eq!(format_optimal(&Value::from(shown), &p).unwrap(), "2d6");

        let boxed = Object::new("Score").with_primitive(vec![Value::Null]);
        assert_eq!(format_optimal(&Value::from(boxed), &p).unwrap(), "{[[null]]}");
    }

    #[test]
    fn test_optimal_plain_object() {
        let p = place(ValueType::Optimal);
        let skill = Object::new("Skill").field("name", "Stealth").field("bonus", 4);
        assert_eq!(
            format_optimal(&Value::from(skill), &p).unwrap(),
            "Skill={name,\nbonus}"
        );

        let anonymous = Object::default().field("x", 1);
        assert_eq!(format_optimal(&Value::from(anonymous), &p).unwrap(), "={x}");
    }

    #[test]
    fn test_optimal_depth_limit() {
        let p = place(ValueType::Optimal);
        let mut value = Value::from(1);
        for _ in 0..5 {
            value = Value::Array(vec![value]);
        }

        assert_eq!(
            format_optimal_with_limit(&value, &p, 5).unwrap(),
            "[[[[[1]]]]]"
        );
        assert_eq!(
            format_optimal_with_limit(&value, &p, 4),
            Err(FormatError::DepthExceeded { limit: 4 })
        );
    }

    #[test]
    fn test_format_value_dispatch() {
        let value = Value::from(3.5);
        assert_eq!(format_value(&value, &place(ValueType::Float), 8).unwrap(), "3.5");
        assert_eq!(
            format_value(&value, &place(ValueType::Integer), 8).unwrap(),
            NOT_A_NUMBER
        );
        assert_eq!(format_value(&value, &place(ValueType::String), 8).unwrap(), "3.5");
    }
}
