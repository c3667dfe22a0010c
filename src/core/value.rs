use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use std::fmt;

/// Largest integer a `Number` holds exactly. JSON integers beyond this become `BigInt`.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A symbol value, optionally registered under a global key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub key: Option<String>,
}

impl Symbol {
    /// A symbol registered under `key`.
    pub fn registered(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    /// A symbol with no registry entry.
    pub fn local() -> Self {
        Self { key: None }
    }
}

/// A structured value with named fields and optional conversion hooks.
///
/// `display` is the result of the object's own string conversion and
/// `primitive` is what its primitive-conversion hook yields. When both are
/// present, `display` wins in every rendering path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    /// Type name shown by the optimal formatter (`Point={x,\ny}`)
    pub class: Option<String>,
    /// Own property names and values, in insertion order
    pub fields: Vec<(String, Value)>,
    pub display: Option<String>,
    pub primitive: Option<Box<Value>>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn with_display(mut self, text: impl Into<String>) -> Self {
        self.display = Some(text.into());
        self
    }

    pub fn with_primitive(mut self, value: impl Into<Value>) -> Self {
        self.primitive = Some(Box::new(value.into()));
        self
    }

    /// Own property names, in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// An argument handed to the formatter.
///
/// One variant per runtime category the formatters distinguish; each
/// category has exactly one rendering rule per formatter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    /// A function value, carried by name
    Callable(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Parses one command-line argument.
    ///
    /// Accepts `undefined`, big-integer literals (`123n`), any JSON document,
    /// and falls back to the raw text as a string.
    pub fn parse_literal(text: &str) -> Self {
        if text == "undefined" {
            return Value::Undefined;
        }

        if let Some(digits) = text.strip_suffix('n') {
            let unsigned = digits.strip_prefix('-').unwrap_or(digits);
            if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(big) = digits.parse::<BigInt>() {
                    return Value::BigInt(big);
                }
            }
        }

        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(json) => json.into(),
            Err(_) => Value::String(text.to_string()),
        }
    }

    /// Numeric coercion with unary-plus semantics. Never fails; the
    /// unconvertible cases yield NaN.
    pub fn to_number(&self) -> f64 {
        self.to_number_within(usize::MAX).unwrap_or(f64::NAN)
    }

    /// [`Value::to_number`] that gives up with `None` once array levels and
    /// primitive-hook unwraps nest deeper than `max_depth`.
    pub fn to_number_within(&self, max_depth: usize) -> Option<f64> {
        self.to_number_at(0, max_depth)
    }

    fn to_number_at(&self, depth: usize, max_depth: usize) -> Option<f64> {
        if depth > max_depth {
            return None;
        }

        let n = match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::BigInt(big) => big.to_f64().unwrap_or(f64::NAN),
            Value::String(s) => string_to_number(s),
            Value::Symbol(_) | Value::Callable(_) => f64::NAN,
            Value::Array(_) => string_to_number(&self.coerce_string_at(depth, max_depth)?),
            Value::Object(object) => {
                if let Some(primitive) = &object.primitive {
                    primitive.to_number_at(depth + 1, max_depth)?
                } else if let Some(display) = &object.display {
                    string_to_number(display)
                } else {
                    f64::NAN
                }
            }
        };
        Some(n)
    }

    /// Default string coercion, as a `"" + value` concatenation would do.
    pub fn coerce_string(&self) -> String {
        self.coerce_string_within(usize::MAX).unwrap_or_default()
    }

    /// [`Value::coerce_string`] that gives up with `None` once array levels
    /// and primitive-hook unwraps nest deeper than `max_depth`.
    pub fn coerce_string_within(&self, max_depth: usize) -> Option<String> {
        self.coerce_string_at(0, max_depth)
    }

    fn coerce_string_at(&self, depth: usize, max_depth: usize) -> Option<String> {
        if depth > max_depth {
            return None;
        }

        let text = match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::BigInt(big) => big.to_string(),
            Value::String(s) => s.clone(),
            Value::Symbol(symbol) => format!("Symbol({})", symbol.key.as_deref().unwrap_or("")),
            Value::Callable(name) => name.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => Some(String::new()),
                    other => other.coerce_string_at(depth + 1, max_depth),
                })
                .collect::<Option<Vec<_>>>()?
                .join(","),
            Value::Object(object) => {
                if let Some(display) = &object.display {
                    display.clone()
                } else if let Some(primitive) = &object.primitive {
                    primitive.coerce_string_at(depth + 1, max_depth)?
                } else {
                    "[object Object]".to_string()
                }
            }
        };
        Some(text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coerce_string())
    }
}

/// Renders a number the way script engines print them.
///
/// Plain decimal notation for magnitudes in `[1e-6, 1e21)`, exponent
/// notation with an explicit sign otherwise. Both zeros print as `0`.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", n);
    }

    // `{:e}` prints the shortest round-trip mantissa, e.g. "1.5e-7" or "1e21"
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}

/// String-to-number conversion for numeric coercion.
fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return BigUint::parse_bytes(trimmed[2..].as_bytes(), radix)
            .and_then(|n| n.to_f64())
            .unwrap_or(f64::NAN);
    }

    // Rust's float parser also takes "inf" and "nan", which are not numeric literals here
    let is_literal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(number) => {
                if let Some(i) = number.as_i64() {
                    if i.unsigned_abs() > MAX_SAFE_INTEGER {
                        return Value::BigInt(BigInt::from(i));
                    }
                } else if let Some(u) = number.as_u64() {
                    return Value::BigInt(BigInt::from(u));
                }
                Value::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(Object {
                class: Some("Object".to_string()),
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
                display: None,
                primitive: None,
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        if n.unsigned_abs() > MAX_SAFE_INTEGER {
            Value::BigInt(BigInt::from(n))
        } else {
            Value::Number(n as f64)
        }
    }
}

impl From<BigInt> for Value {
    fn from(big: BigInt) -> Self {
        Value::BigInt(big)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}
