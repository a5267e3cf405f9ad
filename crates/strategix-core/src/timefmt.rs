//! Playback time labels.

/// Format seconds as `m:ss`. Negative and non-finite input renders as `0:00`.
pub fn format_time(secs: f64) -> String {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(12.0), "0:12");
        assert_eq!(format_time(65.9), "1:05");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn garbage_renders_as_zero() {
        assert_eq!(format_time(-4.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
