//! Response interpretation
//!
//! Helpers for picking apart a raw response line. A `None` line means the
//! agent closed the connection before answering.

/// Status token that opens every successful response line
pub const OK_TOKEN: &str = "OK";

/// Whether a raw response line reports success.
///
/// True iff the line exists and starts with the literal `OK` token.
pub fn is_success(line: Option<&str>) -> bool {
    matches!(line, Some(l) if l.starts_with(OK_TOKEN))
}

/// Extract the extra-data payload from a response line.
///
/// The payload is everything after the first `:`, preserved verbatim
/// (including any leading space); a line with no `:` has an empty payload.
pub fn extra(line: &str) -> &str {
    match line.find(':') {
        Some(offset) => &line[offset + 1..],
        None => "",
    }
}

/// Split a payload into its space-separated tokens, in order.
///
/// Empty segments (leading space, doubled separators, empty payload) are
/// skipped rather than surfaced as empty strings.
pub fn tokens(extra: &str) -> Vec<String> {
    extra
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
