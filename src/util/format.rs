//! Display formatting for timestamps and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Calendar date part of an ISO-8601 timestamp (`2024-01-15T10:00:00Z` ->
/// `2024-01-15`). Anything that does not look like one is shown as is.
#[must_use]
pub fn display_date(raw: &str) -> &str {
    let date = raw.get(..10).unwrap_or(raw);
    let shaped = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if shaped { date } else { raw }
}

/// Date and `HH:MM` of an ISO-8601 timestamp.
#[must_use]
pub fn display_date_time(raw: &str) -> String {
    let date = display_date(raw);
    match raw.get(11..16) {
        Some(time) if date.len() == 10 && raw.as_bytes().get(10) == Some(&b'T') => format!("{date} {time}"),
        _ => raw.to_owned(),
    }
}

/// `"1 book"`, `"3 books"`.
#[must_use]
pub fn count_label(count: u64, singular: &str) -> String {
    if count == 1 { format!("1 {singular}") } else { format!("{count} {singular}s") }
}
