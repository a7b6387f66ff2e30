//! # Line Scanner
//!
//! Walks store file content and yields every line that is a complete
//! single-line alias statement. Anything else is skipped silently; the rc
//! file is free-form and most of its lines are none of our business.

use super::patterns::*;
use crate::model::Alias;

/// Parse one line of the store file.
///
/// The line is trimmed first, so indented aliases inside the file still
/// count. Returns `None` for every non-matching line.
pub fn parse_line(line: &str) -> Option<Alias> {
    let line = line.trim();

    if let Some(caps) = ALIAS_SINGLE_RE.captures(line) {
        return Some(Alias::new(&caps[1], &caps[2]));
    }

    if let Some(caps) = ALIAS_DOUBLE_RE.captures(line) {
        return Some(Alias::new(&caps[1], unescape_double_quoted(&caps[2])));
    }

    if let Some(caps) = ALIAS_NOQUOTE_RE.captures(line) {
        return Some(Alias::new(&caps[1], &caps[2]));
    }

    None
}

/// Lazily scan content, yielding `(line_index, alias)` with 0-based indexes.
pub fn scan(content: &str) -> impl Iterator<Item = (usize, Alias)> + '_ {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line).map(|alias| (idx, alias)))
}

/// Collect the aliases of `content` in file order.
pub fn parse_aliases(content: &str) -> Vec<Alias> {
    scan(content).map(|(_, alias)| alias).collect()
}

/// Remove double-quote escapes the way the shell does.
///
/// Inside double quotes a backslash only escapes `"`, `\`, `$` and `` ` ``;
/// before any other character it is kept literally.
pub(crate) fn unescape_double_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '"' | '\\' | '$' | '`') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Scan result with diagnostics for lines that look like aliases but don't parse
#[derive(Debug, Default)]
pub struct ScanResult {
    pub aliases: Vec<(usize, Alias)>,
    pub warnings: Vec<ScanWarning>,
}

/// A line starting with `alias` that the grammar rejects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    /// 1-based line number
    pub line_number: usize,
    pub raw_line: String,
}

/// Eager scan that also reports malformed alias lines
pub fn scan_with_warnings(content: &str) -> ScanResult {
    let mut result = ScanResult::default();
    for (idx, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some(alias) => result.aliases.push((idx, alias)),
            None if ALIAS_KEYWORD_RE.is_match(line.trim()) => result.warnings.push(ScanWarning {
                line_number: idx + 1,
                raw_line: line.to_string(),
            }),
            None => {}
        }
    }
    result
}
