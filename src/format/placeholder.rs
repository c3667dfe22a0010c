use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use super::tokenizer::FormatSegment;

/// Anchored form of the placeholder grammar with every field captured.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^%(?:(?P<escape>%)|(?:(?P<index>\d+)\$)?(?P<variant>[- +0])?(?P<length>\d+)?(?:\.(?P<precision>\d+))?(?P<type>[dsfixoO]))$",
    )
    .expect("placeholder pattern is valid")
});

/// Semantic type of a placeholder, selected by its specifier character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `%o`: best-effort rendering of any value
    Optimal,
    /// `%O`: property listing of a structured value
    Object,
    /// `%d`
    Decimal,
    /// `%f`
    Float,
    /// `%i`
    Integer,
    /// `%s`
    String,
}

impl ValueType {
    /// Maps a specifier character to its type.
    ///
    /// `x` is lexically accepted by the tokenizer but has no type, so it
    /// maps to `None` like any other unknown character.
    pub fn from_specifier(c: char) -> Option<Self> {
        match c {
            'o' => Some(ValueType::Optimal),
            'O' => Some(ValueType::Object),
            'd' => Some(ValueType::Decimal),
            'f' => Some(ValueType::Float),
            'i' => Some(ValueType::Integer),
            's' => Some(ValueType::String),
            _ => None,
        }
    }

    pub fn specifier(self) -> char {
        match self {
            ValueType::Optimal => 'o',
            ValueType::Object => 'O',
            ValueType::Decimal => 'd',
            ValueType::Float => 'f',
            ValueType::Integer => 'i',
            ValueType::String => 's',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Optimal => "optimal",
            ValueType::Object => "object",
            ValueType::Decimal => "decimal",
            ValueType::Float => "float",
            ValueType::Integer => "integer",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Flag character preceding the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `-`
    LeftAlign,
    /// `+`
    Sign,
    /// ` `
    Space,
    /// `0`
    ZeroPad,
}

impl Variant {
    pub fn from_flag(c: char) -> Option<Self> {
        match c {
            '-' => Some(Variant::LeftAlign),
            '+' => Some(Variant::Sign),
            ' ' => Some(Variant::Space),
            '0' => Some(Variant::ZeroPad),
            _ => None,
        }
    }

    pub fn flag(self) -> char {
        match self {
            Variant::LeftAlign => '-',
            Variant::Sign => '+',
            Variant::Space => ' ',
            Variant::ZeroPad => '0',
        }
    }
}

/// A decoded `%...` directive.
///
/// `index` is 1-based and only set when the template names it (`%2$s`);
/// otherwise the placeholder consumes the next implicit argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl Placeholder {
    /// A bare placeholder of the given type (`%s`, `%d`, ...).
    pub fn new(value_type: ValueType) -> Self {
        Self {
            index: None,
            length: None,
            precision: None,
            variant: None,
            value_type,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if let Some(index) = self.index {
            write!(f, "{}$", index)?;
        }
        if let Some(variant) = self.variant {
            write!(f, "{}", variant.flag())?;
        }
        if let Some(length) = self.length {
            write!(f, "{}", length)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        write!(f, "{}", self.value_type.specifier())
    }
}

/// Decodes one `%...` token.
///
/// Never fails: `%%` becomes the literal `%`, and anything that is not a
/// well-formed placeholder (unknown type character, index `0`, numbers that
/// overflow) comes back as its own text.
pub fn parse_placeholder(token: &str) -> FormatSegment {
    let literal = || FormatSegment::Literal(token.to_string());

    let Some(caps) = PLACEHOLDER.captures(token) else {
        return literal();
    };

    if caps.name("escape").is_some() {
        return FormatSegment::Literal("%".to_string());
    }

    let value_type = caps
        .name("type")
        .and_then(|m| m.as_str().chars().next())
        .and_then(ValueType::from_specifier);
    let Some(value_type) = value_type else {
        return literal();
    };

    let number = |name: &str| -> Result<Option<usize>, ()> {
        match caps.name(name) {
            Some(m) => m.as_str().parse::<usize>().map(Some).map_err(|_| ()),
            None => Ok(None),
        }
    };

    let (Ok(index), Ok(length), Ok(precision)) =
        (number("index"), number("length"), number("precision"))
    else {
        return literal();
    };

    if index == Some(0) {
        return literal();
    }

    let variant = caps
        .name("variant")
        .and_then(|m| m.as_str().chars().next())
        .and_then(Variant::from_flag);

    FormatSegment::Placeholder(Placeholder {
        index,
        length,
        precision,
        variant,
        value_type,
    })
}
