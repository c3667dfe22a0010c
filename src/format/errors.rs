use std::fmt;

use super::placeholder::ValueType;

/// Errors that abort formatting of a whole template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder refers past the end of the argument list.
    ///
    /// `position` is 1-based: the explicit index, or the implicit cursor
    /// after advancing. An explicit index of `0` is reported as position `0`.
    MissingArgument {
        value_type: ValueType,
        position: usize,
        available: usize,
    },
    /// A formatter descended past the configured nesting limit.
    DepthExceeded { limit: usize },
}

impl FormatError {
    pub fn missing_argument(value_type: ValueType, position: usize, available: usize) -> Self {
        FormatError::MissingArgument {
            value_type,
            position,
            available,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            FormatError::MissingArgument {
                value_type,
                position,
                available,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m missing {} argument at position {}",
                        value_type, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: missing {} argument at position {}",
                        value_type, position
                    )?;
                }
                writeln!(f)?;

                let plural = if *available == 1 { "" } else { "s" };
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m template received {} argument{}",
                        available, plural
                    )?;
                } else {
                    write!(f, "hint: template received {} argument{}", available, plural)?;
                }
                Ok(())
            }
            FormatError::DepthExceeded { limit } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m value nesting exceeds depth limit of {}",
                        limit
                    )?;
                    write!(
                        f,
                        "\n\x1b[1;36mhint:\x1b[0m raise `max_depth` in the [settings] table or pass --max-depth"
                    )?;
                } else {
                    writeln!(f, "error: value nesting exceeds depth limit of {}", limit)?;
                    write!(
                        f,
                        "\nhint: raise `max_depth` in the [settings] table or pass --max-depth"
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named template is not in the registry
#[derive(Debug)]
pub struct TemplateNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl TemplateNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for TemplateNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m template '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: template '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`tmplfmt config list`\x1b[0m to see all templates"
            )?;
        } else {
            write!(f, "      run `tmplfmt config list` to see all templates")?;
        }

        Ok(())
    }
}

impl std::error::Error for TemplateNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching template name
pub fn find_closest_template(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
