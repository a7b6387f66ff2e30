//! String utility functions

/// Split a string into lines, keeping each line's terminator attached.
///
/// Unlike `str::lines()`, joining the result gives back the input byte for
/// byte, so edits can touch one line and leave the rest untouched:
/// - `"a\nb"` → `["a\n", "b"]`
/// - `"a\r\nb\n"` → `["a\r\n", "b\n"]`
/// - `"a\n\n"` → `["a\n", "\n"]`
///
/// # Examples
///
/// ```
/// use shalias::utils::strings::split_lines_keep_ends;
///
/// assert_eq!(split_lines_keep_ends("a\nb"), vec!["a\n", "b"]);
/// assert_eq!(split_lines_keep_ends("a\n\n"), vec!["a\n", "\n"]);
/// assert_eq!(split_lines_keep_ends(""), Vec::<&str>::new());
/// ```
pub fn split_lines_keep_ends(s: &str) -> Vec<&str> {
    s.split_inclusive('\n').collect()
}

/// Split one line into its text and its terminator (`"\n"`, `"\r\n"` or `""`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
