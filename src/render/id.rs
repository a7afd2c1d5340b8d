//! Dot identifier handling
//!
//! Tokens that are already valid bare dot IDs are emitted untouched. Anything
//! else is wrapped in double quotes with `"` and `\` escaped, so a stray token
//! can change how a node looks but never breaks the document.

use std::borrow::Cow;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Whether `token` is a dot keyword (matched case-insensitively)
pub fn is_keyword(token: &str) -> bool {
    KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(token))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_bare_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `-?(.[0-9]+ | [0-9]+(.[0-9]*)?)`
fn is_numeral(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    match frac {
        None => !int.is_empty() && all_digits(int),
        Some(frac) if int.is_empty() => !frac.is_empty() && all_digits(frac),
        Some(frac) => all_digits(int) && all_digits(frac),
    }
}

/// Whether `token` can appear unquoted as a node or graph ID
pub fn is_bare_id(token: &str) -> bool {
    (is_bare_identifier(token) || is_numeral(token)) && !is_keyword(token)
}

/// Wrap `value` in double quotes, escaping embedded quotes and backslashes
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Format a token as a dot ID, quoting only when needed
pub fn format_id(token: &str) -> Cow<'_, str> {
    if is_bare_id(token) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(quote(token))
    }
}
