use chrono::NaiveDateTime;

const TIMESTAMP_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// Shorten `s` to at most `max_chars` characters, ending in "..." when cut.
/// Counts characters, not bytes, so Polish diacritics are never split.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Render a stored ISO-8601 timestamp as `YYYY-MM-DD HH:MM`. Unparseable
/// values are shown as they are.
pub fn display_timestamp(timestamp: &str) -> String {
    TIMESTAMP_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
