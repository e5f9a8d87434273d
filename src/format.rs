//! Display formatting for sizes and timestamps.

use std::time::SystemTime;

use chrono::{DateTime, Local};

const UNIT: u64 = 1024;
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count as a human-readable string.
///
/// Counts below 1 KiB print as whole bytes (`"500 B"`); larger counts print
/// with one decimal in the largest binary unit whose quotient stays below
/// 1024 (`"1.5 KB"`, `"1.0 MB"`).
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!(
        "{:.1} {}B",
        bytes as f64 / div as f64,
        UNIT_PREFIXES[exp]
    )
}

/// Format a modification time in local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(time) => DateTime::<Local>::from(time)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn format_size_kb() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(102_400), "100.0 KB");
    }

    #[test]
    fn format_size_mb_and_up() {
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(format_size(1 << 40), "1.0 TB");
        assert_eq!(format_size(1 << 50), "1.0 PB");
        assert_eq!(format_size(1 << 60), "1.0 EB");
    }

    #[test]
    fn format_size_largest_value_does_not_overflow() {
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn format_size_stays_ordered_within_a_bracket() {
        let samples = [1024u64, 1100, 1536, 2048, 10_000, 500_000, 1_000_000];
        for pair in samples.windows(2) {
            let (a, b) = (format_size(pair[0]), format_size(pair[1]));
            let parse = |s: &str| s.split(' ').next().unwrap().parse::<f64>().unwrap();
            assert!(parse(&a) <= parse(&b), "{} > {}", a, b);
        }
    }

    #[test]
    fn format_size_is_deterministic() {
        assert_eq!(format_size(123_456), format_size(123_456));
    }

    #[test]
    fn format_modified_missing_is_empty() {
        assert_eq!(format_modified(None), "");
    }

    #[test]
    fn format_modified_shape() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let s = format_modified(Some(t));
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
        assert_eq!(&s[13..14], ":");
    }
}
