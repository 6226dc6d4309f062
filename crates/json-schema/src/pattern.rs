//! Delimiter-wrapped pattern notation.
//!
//! Schema `pattern` strings (and `patternProperties` keys) are written with
//! explicit delimiters: the first character opens the pattern, the same
//! character closes it, and the only modifiers accepted after the closing
//! delimiter are `i`, `m`, `s`, and `x`, applied as inline flags. The body
//! between the delimiters must compile with the `regex` crate.
//!
//! `"#valid#"` compiles; `"#missing-delimiter"` is a pattern error because
//! the closing `#` never appears.

use regex::Regex;

use crate::error::SchemaError;

/// Compile a delimiter-wrapped pattern string.
///
/// # Errors
///
/// Returns [`SchemaError::PatternError`] when the string is too short to
/// carry delimiters, the delimiter is alphanumeric or whitespace, the
/// closing delimiter is missing, an unknown modifier follows it, or the
/// body is not a valid regular expression.
pub fn compile(pattern: &str) -> Result<Regex, SchemaError> {
    let fail = |reason: &str| SchemaError::PatternError {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = pattern.chars();
    let delimiter = chars.next().ok_or_else(|| fail("empty pattern"))?;
    if delimiter.is_alphanumeric() || delimiter.is_whitespace() || delimiter == '\\' {
        return Err(fail("delimiter must be a punctuation character"));
    }

    let rest = &pattern[delimiter.len_utf8()..];
    let close = rest
        .rfind(delimiter)
        .ok_or_else(|| fail("missing closing delimiter"))?;
    let body = &rest[..close];
    let modifiers = &rest[close + delimiter.len_utf8()..];

    let mut flags = String::new();
    for m in modifiers.chars() {
        match m {
            'i' | 'm' | 's' | 'x' => {
                if !flags.contains(m) {
                    flags.push(m);
                }
            }
            _ => return Err(fail("unknown pattern modifier")),
        }
    }

    let source = if flags.is_empty() {
        body.to_string()
    } else {
        format!("(?{flags}){body}")
    };

    Regex::new(&source).map_err(|e| SchemaError::PatternError {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Shape check without keeping the compiled program.
pub fn is_valid(pattern: &str) -> bool {
    compile(pattern).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_delimited_pattern_compiles() {
        let re = compile("#valid#").unwrap();
        assert!(re.is_match("this is valid"));
    }

    #[test]
    fn missing_closing_delimiter_fails() {
        let err = compile("#missing-delimiter").unwrap_err();
        assert!(matches!(err, SchemaError::PatternError { .. }));
    }

    #[test]
    fn alphanumeric_delimiter_rejected() {
        assert!(compile("avalida").is_err());
        assert!(compile("1x1").is_err());
    }

    #[test]
    fn invalid_body_fails() {
        assert!(compile("/a(b/").is_err());
    }

    #[test]
    fn modifiers_map_to_inline_flags() {
        let re = compile("/^abc$/i").unwrap();
        assert!(re.is_match("ABC"));
        assert!(compile("/x/q").is_err());
    }

    #[test]
    fn slash_delimiters_and_anchors() {
        let re = compile(r"/^\d{3}$/").unwrap();
        assert!(re.is_match("123"));
        assert!(!re.is_match("12"));
    }

    #[test]
    fn empty_pattern_fails() {
        assert!(compile("").is_err());
        assert!(compile("#").is_err());
    }
}
