//! # Parser Module
//!
//! Recognises `alias` statements inside an otherwise free-form rc file.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs        - This file: re-exports
//! ├── patterns.rs   - Regex patterns (ALIAS_SINGLE_RE, ALIAS_DOUBLE_RE, ...)
//! ├── scanner.rs    - Line scanner over whole file content
//! └── resolver.rs   - Validation of user-typed statements
//! ```
//!
//! ## Grammar
//!
//! After trimming, a line is an alias iff it reads `alias <name>=<value>`:
//!
//! | Value form | Example | Command |
//! |------------|---------|---------|
//! | single-quoted | `alias nv='node -v'` | `node -v` |
//! | double-quoted | `alias x="a \"b\" c"` | `a "b" c` |
//! | unquoted | `alias v=nvim` | `nvim` |
//!
//! `<name>` is any run of non-whitespace, non-`=` characters. Multi-line
//! aliases, shell functions and options such as `alias -g` are not
//! recognised and pass through untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shalias::parser::{resolve, scan};
//!
//! for (idx, alias) in scan(&content) {
//!     println!("{}: {} = {}", idx + 1, alias.alias_name, alias.command);
//! }
//!
//! let alias = resolve("alias nv='node -v'")?;
//! ```

pub mod patterns;
mod resolver;
mod scanner;

pub use resolver::{resolve, resolve_parts};
pub use scanner::{parse_aliases, parse_line, scan, scan_with_warnings, ScanResult, ScanWarning};
