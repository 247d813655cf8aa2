//! Time formatting and lenient parsing of the time/duration attributes the
//! transcript document carries.

/// Format seconds as `M:SS` (minutes unpadded, seconds zero-padded).
/// Negative or non-finite input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}

/// Parse a seconds value from an attribute string. Returns `None` for
/// anything that is not a finite number.
pub fn parse_seconds(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Parse a duration that may be a bare number or the display form `"5s"`.
pub fn parse_duration(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    match parse_seconds(trimmed) {
        Some(v) => Some(v),
        None => parse_seconds(trimmed.strip_suffix('s')?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(7.9), "0:07");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(73.4), "1:13");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn format_clamps_invalid_input() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn parses_plain_seconds() {
        assert_eq!(parse_seconds("12.5"), Some(12.5));
        assert_eq!(parse_seconds(" 3 "), Some(3.0));
        assert_eq!(parse_seconds("abc"), None);
        assert_eq!(parse_seconds("NaN"), None);
        assert_eq!(parse_seconds("inf"), None);
    }

    #[test]
    fn parses_duration_text_form() {
        assert_eq!(parse_duration("5"), Some(5.0));
        assert_eq!(parse_duration("5s"), Some(5.0));
        assert_eq!(parse_duration("2.25s"), Some(2.25));
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration(""), None);
    }
}
