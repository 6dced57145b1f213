//! Taskbar text helpers.

/// Clock refresh cadence.
pub const CLOCK_REFRESH_MS: u64 = 1_000;

/// Formats a 24-hour time as `hh:mm AM/PM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour:02}:{minutes:02} {suffix}")
}

/// Current local wall-clock time as `(hours, minutes)`.
#[cfg(target_arch = "wasm32")]
pub fn local_time() -> (u32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_hours(), now.get_minutes())
}

/// Current UTC time as `(hours, minutes)`.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_time() -> (u32, u32) {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    (((secs / 3600) % 24) as u32, ((secs / 60) % 60) as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_uses_twelve_hour_time() {
        assert_eq!(format_clock(0, 5), "12:05 AM");
        assert_eq!(format_clock(9, 30), "09:30 AM");
        assert_eq!(format_clock(12, 0), "12:00 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }
}
