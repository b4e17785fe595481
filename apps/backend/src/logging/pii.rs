use std::fmt;

/// Masks a player name for logs: first character, then `***`.
pub fn redact_name(name: &str) -> String {
    match name.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Masks a share code for logs: first four characters, then `****`.
///
/// A share code is enough to open a room, so logs never carry it whole.
pub fn redact_code(code: &str) -> String {
    let visible: String = code.chars().take(4).collect();
    format!("{visible}****")
}

/// A wrapper that redacts a player name when displayed.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact_name(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact_name(self.0))
    }
}
