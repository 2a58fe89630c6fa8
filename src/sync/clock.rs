//! Playback clock and seek-bar helpers

/// Format seconds as `m:ss`. Negative or non-finite input shows `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds >= 0.0 {
        seconds
    } else {
        0.0
    };
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Playback progress in `[0, 1]`; 0 while the duration is unknown
pub fn seek_fraction(current: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) || !current.is_finite() {
        return 0.0;
    }
    (current / duration).max(0.0).min(1.0)
}

/// Playback time for a seek-bar position, or `None` while the duration is unknown
pub fn time_for_seek(fraction: f64, duration: f64) -> Option<f64> {
    if !(duration.is_finite() && duration > 0.0) {
        return None;
    }
    let fraction = if fraction.is_finite() { fraction.max(0.0).min(1.0) } else { 0.0 };
    Some(fraction * duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(59.9), "0:59");
        assert_eq!(format_clock(61.0), "1:01");
        assert_eq!(format_clock(754.2), "12:34");
        assert_eq!(format_clock(-3.0), "0:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_seek_fraction() {
        assert_eq!(seek_fraction(30.0, 120.0), 0.25);
        assert_eq!(seek_fraction(30.0, 0.0), 0.0);
        assert_eq!(seek_fraction(30.0, f64::NAN), 0.0);
        assert_eq!(seek_fraction(500.0, 120.0), 1.0);
    }

    #[test]
    fn test_time_for_seek() {
        assert_eq!(time_for_seek(0.5, 200.0), Some(100.0));
        assert_eq!(time_for_seek(0.5, 0.0), None);
        assert_eq!(time_for_seek(2.0, 200.0), Some(200.0));
    }
}
