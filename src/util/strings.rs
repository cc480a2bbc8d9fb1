//! String normalization helpers
//!
//! Small total functions used by the template engine to keep source strings
//! and placeholder tokens well-formed:
//! - `clean`: collapse runs of spaces and newlines (idempotent)
//! - `wrap` / `unwrap`: add / remove a fixed prefix and suffix
//! - `split`, `first_char`, `last_char`: thin scanning helpers

/// Collapse every double space and every newline into a single space,
/// repeating until neither remains.
///
/// Idempotent: `clean(clean(s)) == clean(s)`. Single leading or trailing
/// spaces are kept; only runs and newlines are normalized.
pub fn clean(s: &str) -> String {
    let mut out = s.to_string();
    while out.contains('\n') || out.contains("  ") {
        out = out.replace('\n', " ").replace("  ", " ");
    }
    out
}

/// Surround `s` with a fixed prefix and suffix.
pub fn wrap(s: &str, start: &str, end: &str) -> String {
    format!("{start}{s}{end}")
}

/// Return the substring strictly between the first occurrence of `start` and
/// the first occurrence of `end` after it.
///
/// Total: when either marker is absent the input is returned unchanged.
pub fn unwrap(s: &str, start: &str, end: &str) -> String {
    let Some(open) = s.find(start) else {
        return s.to_string();
    };
    let inner = &s[open + start.len()..];
    match inner.find(end) {
        Some(close) => inner[..close].to_string(),
        None => s.to_string(),
    }
}

/// Split `s` on `separator` into owned parts.
pub fn split(s: &str, separator: &str) -> Vec<String> {
    s.split(separator).map(String::from).collect()
}

/// First character of `s`, if any.
pub fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Last character of `s`, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}
