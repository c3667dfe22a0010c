use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::placeholder::{Placeholder, parse_placeholder};

/// Unanchored placeholder grammar used to split templates. Matches `%%` or a
/// full directive; `x` is accepted here and rejected by the parser.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:%|(?:\d+\$)?[- +0]?\d*(?:\.\d+)?[dsfixoO])")
        .expect("token pattern is valid")
});

/// A raw slice of the template.
///
/// Concatenating the text of every token reproduces the template exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Directive(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Literal(text) | Token::Directive(text) => text,
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Splits a template into alternating literal and directive tokens.
///
/// Literal tokens are emitted between every pair of directives and at both
/// ends, so empty literals appear at the boundaries.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in TOKEN.find_iter(template) {
        tokens.push(Token::Literal(&template[last..m.start()]));
        tokens.push(Token::Directive(m.as_str()));
        tracing::trace!(directive = m.as_str(), offset = m.start(), "template token");
        last = m.end();
    }
    tokens.push(Token::Literal(&template[last..]));

    tokens
}

/// Tokenizes `template` and decodes each directive.
pub fn parse_template(template: &str) -> Vec<FormatSegment> {
    tokenize(template)
        .into_iter()
        .map(|token| match token {
            Token::Literal(text) => FormatSegment::Literal(text.to_string()),
            Token::Directive(text) => parse_placeholder(text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::placeholder::ValueType;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_plain_text_is_single_literal() {
        assert_eq!(tokenize("no placeholders"), vec![Token::Literal("no placeholders")]);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(tokenize(""), vec![Token::Literal("")]);
    }

    #[test]
    fn test_boundary_literals_are_kept() {
        let tokens = tokenize("%s");
        assert_eq!(
            tokens,
            vec![Token::Literal(""), Token::Directive("%s"), Token::Literal("")]
        );
    }

    #[test]
    fn test_adjacent_directives() {
        let tokens = tokenize("%d%%%2$s");
        assert_eq!(texts(&tokens), vec!["", "%d", "", "%%", "", "%2$s", ""]);
    }

    #[test]
    fn test_lone_percent_stays_literal() {
        assert_eq!(tokenize("100% sure"), vec![Token::Literal("100% sure")]);
        assert_eq!(tokenize("trailing %"), vec![Token::Literal("trailing %")]);
    }

    #[test]
    fn test_tokens_reconstruct_template() {
        let template = "STR %2$d (%+.1f) %x %q %% %s";
        let joined: String = tokenize(template).iter().map(Token::text).collect();
        assert_eq!(joined, template);
    }

    #[test]
    fn test_parse_template_segments() {
        let segments = parse_template("HP: %d/%d%%");
        assert_eq!(
            segments,
            vec![
                FormatSegment::Literal("HP: ".to_string()),
                FormatSegment::Placeholder(Placeholder::new(ValueType::Decimal)),
                FormatSegment::Literal("/".to_string()),
                FormatSegment::Placeholder(Placeholder::new(ValueType::Decimal)),
                FormatSegment::Literal(String::new()),
                FormatSegment::Literal("%".to_string()),
                FormatSegment::Literal(String::new()),
            ]
        );
    }

    #[test]
    fn test_unicode_literals() {
        let tokens = tokenize("⚔ %s ⚔");
        assert_eq!(texts(&tokens), vec!["⚔ ", "%s", " ⚔"]);
    }
}
