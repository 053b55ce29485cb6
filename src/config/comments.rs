//! Line comment removal for JSON config files.
//!
//! Config files may carry `//` comments running to the end of the line.
//! They are removed before the text reaches the JSON parser. A `//` inside a
//! string literal is part of the value and is left alone.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Group 1 matches a whole string literal so comment markers inside it are skipped.
    PATTERN.get_or_init(|| {
        Regex::new(r#"("(?:[^"\\]|\\.)*")|//[^\r\n]*"#).expect("comment pattern is valid")
    })
}

/// Removes all `//` line comments from `text`.
///
/// Line breaks are kept, so parser error positions still match the file.
/// Returns the input unchanged (borrowed) when it contains no comments.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("//") {
        return Cow::Borrowed(text);
    }

    pattern().replace_all(text, |caps: &Captures| match caps.get(1) {
        Some(literal) => literal.as_str().to_string(),
        None => String::new(),
    })
}
