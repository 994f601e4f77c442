use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown field `{0}` in name template")]
    UnknownField(String),
    #[error("unsupported format spec `{0}` in name template")]
    UnsupportedFormatSpec(String),
    #[error("unclosed `{{` in name template")]
    UnclosedPlaceholder,
    #[error("single `}}` encountered in name template")]
    UnmatchedClosingBrace,
}

/// A field value. Numbers align right by default, text aligns left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// `[[fill]align][width]`, the subset of the format spec mini-language
/// that makes sense for name prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormatSpec {
    fill: char,
    align: Option<Align>,
    width: usize,
}

impl FormatSpec {
    fn parse(spec: &str) -> Result<Self, TemplateError> {
        let unsupported = || TemplateError::UnsupportedFormatSpec(spec.to_string());
        let chars: Vec<char> = spec.chars().collect();

        let (fill, align, rest) = match chars.as_slice() {
            [fill, align, rest @ ..] if Align::from_char(*align).is_some() => {
                (*fill, Align::from_char(*align), rest)
            }
            [align, rest @ ..] if Align::from_char(*align).is_some() => {
                (' ', Align::from_char(*align), rest)
            }
            rest => (' ', None, rest),
        };

        if !rest.iter().all(char::is_ascii_digit) {
            return Err(unsupported());
        }
        let width = if rest.is_empty() {
            0
        } else {
            rest.iter()
                .collect::<String>()
                .parse()
                .map_err(|_| unsupported())?
        };

        Ok(Self { fill, align, width })
    }

    fn apply(self, value: &Value) -> String {
        let text = value.to_string();
        let padding = self.width.saturating_sub(text.chars().count());
        if padding == 0 {
            return text;
        }

        let align = self.align.unwrap_or(match value {
            Value::Number(_) => Align::Right,
            Value::Text(_) => Align::Left,
        });
        let (before, after) = match align {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => (padding / 2, padding - padding / 2),
        };

        let fill = |count: usize| std::iter::repeat(self.fill).take(count);
        fill(before).chain(text.chars()).chain(fill(after)).collect()
    }
}

/// Expands `{field}` and `{field:spec}` placeholders through `lookup`.
/// `{{` and `}}` stand for literal braces.
pub fn render(
    template: &str,
    lookup: impl Fn(&str) -> Option<Value>,
) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                rendered.push('{');
            }
            '{' => {
                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => placeholder.push(c),
                        None => return Err(TemplateError::UnclosedPlaceholder),
                    }
                }
                let (field, spec) = placeholder
                    .split_once(':')
                    .unwrap_or((placeholder.as_str(), ""));
                let spec = FormatSpec::parse(spec)?;
                let value =
                    lookup(field).ok_or_else(|| TemplateError::UnknownField(field.to_string()))?;
                rendered.push_str(&spec.apply(&value));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                rendered.push('}');
            }
            '}' => return Err(TemplateError::UnmatchedClosingBrace),
            c => rendered.push(c),
        }
    }

    Ok(rendered)
}

#[cfg(test)]
mod test {
    use super::*;

    fn lookup(field: &str) -> Option<Value> {
        match field {
            "xwn8" => Some(Value::Number(987)),
            "wn8" => Some(Value::Text("-".to_string())),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_fields() {
        assert_eq!(render("[{xwn8}|{wn8}] ", lookup).unwrap(), "[987|-] ");
        assert_eq!(render("plain", lookup).unwrap(), "plain");
    }

    #[test]
    fn doubled_braces_are_literal() {
        assert_eq!(render("{{{xwn8}}} ", lookup).unwrap(), "{987} ");
    }

    #[test]
    fn alignment_and_width() {
        assert_eq!(render("[{xwn8:>4}] ", lookup).unwrap(), "[ 987] ");
        assert_eq!(render("[{wn8:<3}] ", lookup).unwrap(), "[-  ] ");
        assert_eq!(render("[{xwn8:*^7}]", lookup).unwrap(), "[**987**]");
        assert_eq!(render("[{xwn8:2}]", lookup).unwrap(), "[987]");
    }

    #[test]
    fn width_alone_follows_value_kind() {
        assert_eq!(render("[{xwn8:5}]", lookup).unwrap(), "[  987]");
        assert_eq!(render("[{wn8:3}]", lookup).unwrap(), "[-  ]");
    }

    #[test]
    fn malformed_templates_are_errors() {
        assert_eq!(
            render("{battles} ", lookup),
            Err(TemplateError::UnknownField("battles".to_string()))
        );
        assert_eq!(
            render("{xwn8:.2f} ", lookup),
            Err(TemplateError::UnsupportedFormatSpec(".2f".to_string()))
        );
        assert_eq!(
            render("[{xwn8", lookup),
            Err(TemplateError::UnclosedPlaceholder)
        );
        assert_eq!(
            render("xwn8} ", lookup),
            Err(TemplateError::UnmatchedClosingBrace)
        );
    }
}
