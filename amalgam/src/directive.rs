//! Recognition and parsing of `#include` lines.
//!
//! Parsing is line-oriented prefix matching, not tokenizing. A line is an
//! include directive when it starts with the literal `#include` and the
//! keyword is not part of a longer word (`#include_next`, `#includes`). The
//! keyword must be followed by a space or tab, then a path token delimited by
//! `"..."` (local) or `<...>` (system), and nothing but whitespace may follow
//! it.

use std::fmt;

/// The keyword that introduces an include directive.
pub const INCLUDE_KEYWORD: &str = "#include";

/// The character whose presence at the start of a line ends a header block.
pub const HEADER_MARKER: char = '#';

/// How the included path was delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    /// `#include "path"`: inlined by the expander.
    Local,
    /// `#include <path>`: passed through unchanged.
    System,
}

impl QuoteStyle {
    const fn closing(self) -> char {
        match self {
            Self::Local => '"',
            Self::System => '>',
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::System => write!(f, "system"),
        }
    }
}

/// A parsed `#include` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective<'a> {
    /// Delimiter style of the path token.
    pub quote_style: QuoteStyle,
    /// The path exactly as written between the delimiters.
    pub raw_path: &'a str,
}

/// Why an include line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// Nothing follows the keyword.
    MissingPath,
    /// The path token is not separated from the keyword by whitespace.
    MissingSeparator,
    /// The path token does not start with `"` or `<`.
    BadDelimiter(char),
    /// The closing delimiter never appears.
    Unterminated(char),
    /// The delimiters enclose nothing.
    EmptyPath,
    /// Non-whitespace text follows the closing delimiter.
    TrailingText(String),
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "missing path after #include"),
            Self::MissingSeparator => {
                write!(f, "expected whitespace between #include and the path")
            }
            Self::BadDelimiter(c) => {
                write!(f, "expected '\"' or '<' to start the path, found '{c}'")
            }
            Self::Unterminated(c) => write!(f, "missing closing '{c}'"),
            Self::EmptyPath => write!(f, "empty path"),
            Self::TrailingText(text) => write!(f, "unexpected text after path: '{text}'"),
        }
    }
}

impl std::error::Error for DirectiveError {}

/// Returns true if `line` starts with the header-ending marker.
#[must_use]
pub fn is_marker_line(line: &str) -> bool {
    line.starts_with(HEADER_MARKER)
}

/// Parse a line as an include directive.
///
/// Returns `Ok(None)` for lines that are not include directives at all,
/// including `#include_next`, `#includes`, and indented directives. A bare
/// `#include` or one glued to its path (`#include"a.h"`) is a directive with
/// a malformed path.
///
/// # Errors
///
/// Returns a [`DirectiveError`] if the line is an include directive whose
/// path token is malformed.
///
/// # Examples
///
/// ```
/// use amalgam::directive::{parse_include, QuoteStyle};
///
/// let d = parse_include("#include \"detail/impl.h\"\n").unwrap().unwrap();
/// assert_eq!(d.quote_style, QuoteStyle::Local);
/// assert_eq!(d.raw_path, "detail/impl.h");
///
/// let d = parse_include("#include <vector>").unwrap().unwrap();
/// assert_eq!(d.quote_style, QuoteStyle::System);
///
/// assert!(parse_include("#pragma once").unwrap().is_none());
/// assert!(parse_include("#include \"open.h").is_err());
/// ```
pub fn parse_include(line: &str) -> Result<Option<IncludeDirective<'_>>, DirectiveError> {
    let Some(rest) = line.strip_prefix(INCLUDE_KEYWORD) else {
        return Ok(None);
    };
    match rest.chars().next() {
        Some(c) if c == '_' || c.is_alphanumeric() => return Ok(None),
        Some(' ' | '\t') => {}
        Some('"' | '<') => return Err(DirectiveError::MissingSeparator),
        Some(c) if !c.is_whitespace() => return Err(DirectiveError::BadDelimiter(c)),
        _ => return Err(DirectiveError::MissingPath),
    }

    let token = rest.trim_start_matches([' ', '\t']);
    let mut chars = token.chars();
    let quote_style = match chars.next() {
        Some('"') => QuoteStyle::Local,
        Some('<') => QuoteStyle::System,
        Some(c) if !c.is_whitespace() => return Err(DirectiveError::BadDelimiter(c)),
        _ => return Err(DirectiveError::MissingPath),
    };

    let body = &token[1..];
    let closing = quote_style.closing();
    let end = body
        .find(|c: char| c == closing || c == '\n' || c == '\r')
        .filter(|&i| body[i..].starts_with(closing))
        .ok_or(DirectiveError::Unterminated(closing))?;

    let raw_path = &body[..end];
    if raw_path.is_empty() {
        return Err(DirectiveError::EmptyPath);
    }

    let trailing = body[end + closing.len_utf8()..].trim();
    if !trailing.is_empty() {
        return Err(DirectiveError::TrailingText(trailing.to_string()));
    }

    Ok(Some(IncludeDirective {
        quote_style,
        raw_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_include() {
        let d = parse_include("#include \"b.h\"\n").unwrap().unwrap();
        assert_eq!(
            d,
            IncludeDirective {
                quote_style: QuoteStyle::Local,
                raw_path: "b.h",
            }
        );
    }

    #[test]
    fn test_system_include_with_tab_and_crlf() {
        let d = parse_include("#include\t<sys/types.h>\r\n").unwrap().unwrap();
        assert_eq!(d.quote_style, QuoteStyle::System);
        assert_eq!(d.raw_path, "sys/types.h");
    }

    #[test]
    fn test_path_with_spaces() {
        let d = parse_include("#include \"my dir/x.h\"").unwrap().unwrap();
        assert_eq!(d.raw_path, "my dir/x.h");
    }

    #[test]
    fn test_not_an_include() {
        for line in [
            "int a;\n",
            "#pragma once\n",
            "#include_next <x.h>\n",
            "#includes\n",
            "  #include \"indented.h\"\n",
            "# include \"spaced.h\"\n",
            "// #include \"commented.h\"\n",
            "",
        ] {
            assert_eq!(parse_include(line), Ok(None), "line: {line:?}");
        }
    }

    #[test]
    fn test_missing_path() {
        assert_eq!(parse_include("#include \n"), Err(DirectiveError::MissingPath));
        assert_eq!(parse_include("#include  "), Err(DirectiveError::MissingPath));
    }

    #[test]
    fn test_bare_keyword_is_missing_path() {
        for line in ["#include\n", "#include", "#include\r\n"] {
            assert_eq!(
                parse_include(line),
                Err(DirectiveError::MissingPath),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn test_path_glued_to_keyword() {
        assert_eq!(
            parse_include("#include\"b.h\"\n"),
            Err(DirectiveError::MissingSeparator)
        );
        assert_eq!(
            parse_include("#include<vector>\n"),
            Err(DirectiveError::MissingSeparator)
        );
        assert_eq!(
            parse_include("#include(x.h)\n"),
            Err(DirectiveError::BadDelimiter('('))
        );
    }

    #[test]
    fn test_bad_delimiter() {
        assert_eq!(
            parse_include("#include CONFIG_HEADER\n"),
            Err(DirectiveError::BadDelimiter('C'))
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            parse_include("#include \"b.h\n"),
            Err(DirectiveError::Unterminated('"'))
        );
        assert_eq!(
            parse_include("#include <b.h\"\n"),
            Err(DirectiveError::Unterminated('>'))
        );
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(parse_include("#include \"\"\n"), Err(DirectiveError::EmptyPath));
        assert_eq!(parse_include("#include <>"), Err(DirectiveError::EmptyPath));
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(
            parse_include("#include \"a.h\" // why\n"),
            Err(DirectiveError::TrailingText("// why".to_string()))
        );
        assert!(parse_include("#include \"a.h\"   \n").unwrap().is_some());
    }

    #[test]
    fn test_marker_line() {
        assert!(is_marker_line("#pragma once\n"));
        assert!(is_marker_line("#\n"));
        assert!(!is_marker_line(" #define X\n"));
        assert!(!is_marker_line("// banner\n"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DirectiveError::Unterminated('"').to_string(),
            "missing closing '\"'"
        );
        assert!(DirectiveError::BadDelimiter('X').to_string().contains("'X'"));
        assert!(DirectiveError::MissingSeparator
            .to_string()
            .contains("whitespace"));
    }
}
