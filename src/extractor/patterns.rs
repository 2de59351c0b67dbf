/// Loose email syntax: `local@domain.tld` with a 2-4 letter top-level domain.
/// Compiled case-insensitively.
pub const EMAIL_PATTERN: &str = r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}\b";

/// Bracketed or quoted substrings, delimiters included.
///
/// Both alternatives are greedy and `.` stops at line breaks, so a line such
/// as `<a> and <b>` yields the single match `<a> and <b>`, not two. Switching
/// to lazy quantifiers would change which entries are produced.
pub const DELIMITED_PATTERN: &str = r#"(<.*>|".*")"#;

/// Characters that separate plain fields when no delimited substring exists.
pub const FIELD_DELIMITERS: &[char] = &[',', ';', '\r', '\n'];
