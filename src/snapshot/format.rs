//! Human-readable formatting for durations and byte counts.

use std::time::Duration;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a duration as `HHhMMmSSs`.
///
/// Hours are not wrapped, so long uptimes render as e.g. `100h00m00s`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}h{minutes:02}m{seconds:02}s")
}

/// Format a byte count with 1024-based units and one decimal.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", BYTE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "00h00m00s");
        assert_eq!(format_duration(Duration::from_millis(61_999)), "00h01m01s");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 5)), "03h00m05s");
        assert_eq!(format_duration(Duration::from_secs(100 * 3600)), "100h00m00s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GB");
    }

    #[test]
    fn test_format_bytes_caps_at_terabytes() {
        assert_eq!(format_bytes(1024_u64.pow(5)), "1024.0 TB");
    }
}
