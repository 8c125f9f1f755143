//! Formatting helpers shared by the view components.

use std::time::Duration;

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date), Some(time)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date.get(5..10), time.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Percentage for a gauge, clamped to 0..=100.
pub fn gauge_percent(ratio: f64) -> u16 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio * 100.0).round().clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-14 09:26:53"), "03-14 09:26");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(75)), "1m 15s");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }

    #[test]
    fn test_gauge_percent_clamps() {
        assert_eq!(gauge_percent(0.25), 25);
        assert_eq!(gauge_percent(1.7), 100);
        assert_eq!(gauge_percent(-0.5), 0);
        assert_eq!(gauge_percent(f64::NAN), 0);
    }
}
