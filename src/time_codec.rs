//! Conversions between 24-hour `HH:MM` strings and 12-hour display strings.
//! The two directions are not exact inverses.

// Hour and minute components; trailing seconds are dropped.
fn clock_parts(clock: &str) -> Option<(&str, &str)> {
    let mut parts = clock.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    Some((hours, minutes))
}

pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let Some((hours, minutes)) = clock_parts(time) else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes} {period}")
}

/// Input that contains a colon and no AM/PM marker is treated as already
/// normalised and returned as is.
pub fn parse_time(time: &str) -> String {
    if time.contains(':') && !time.contains("AM") && !time.contains("PM") {
        return time.to_string();
    }

    let mut parts = time.split(' ');
    let clock = parts.next().unwrap_or_default();
    let period = parts.next();

    let Some((hours, minutes)) = clock_parts(clock) else {
        return time.to_string();
    };
    let Ok(hour) = hours.parse::<u32>() else {
        return time.to_string();
    };

    let hour = match period {
        Some("PM") if hour != 12 => hour.checked_add(12),
        Some("AM") if hour == 12 => Some(0),
        _ => Some(hour),
    };
    let Some(hour) = hour else {
        return time.to_string();
    };
    format!("{hour:02}:{minutes}")
}
