//! # Alias Regex Patterns
//!
//! All regex patterns for recognising `alias` statements.
//!
//! ## Pattern Naming Convention
//!
//! - `ALIAS_SINGLE_RE` - Single-quoted value
//! - `ALIAS_DOUBLE_RE` - Double-quoted value (backslash escapes allowed)
//! - `ALIAS_NOQUOTE_RE` - Unquoted value
//!
//! Every pattern is anchored at both ends and expects an already trimmed line.
//!
//! ## Regex Notes
//!
//! Rust's `regex` crate does not support backreferences, so we use
//! separate patterns for single-quoted and double-quoted variants.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches single-quoted alias: `alias name='value'`
    ///
    /// Captures:
    /// - Group 1: alias name (allows special chars like `.`, `~`, `-`)
    /// - Group 2: alias value (content between single quotes)
    pub static ref ALIAS_SINGLE_RE: Regex = Regex::new(
        r#"^alias\s+([^\s=]+)='([^']*)'$"#
    ).unwrap();

    /// Matches double-quoted alias: `alias name="value"`
    ///
    /// Captures:
    /// - Group 1: alias name
    /// - Group 2: raw alias value, escapes still in place
    pub static ref ALIAS_DOUBLE_RE: Regex = Regex::new(
        r#"^alias\s+([^\s=]+)="((?:[^"\\]|\\.)*)"$"#
    ).unwrap();

    /// Matches unquoted alias: `alias name=value`
    ///
    /// Captures:
    /// - Group 1: alias name
    /// - Group 2: alias value (single word, no quotes, no spaces)
    pub static ref ALIAS_NOQUOTE_RE: Regex = Regex::new(
        r#"^alias\s+([^\s=]+)=([^\s'"]+)$"#
    ).unwrap();

    /// Matches anything that starts like an alias statement.
    ///
    /// Used only to tell "not an alias at all" apart from "malformed alias"
    /// when reporting scan warnings.
    pub static ref ALIAS_KEYWORD_RE: Regex = Regex::new(
        r#"^alias\s+\S"#
    ).unwrap();
}
