//! Time utilities: parsing HH:MM, duration strings, minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse a clock value (`H:MM`, `HH:MM` or `HH:MM:SS`), truncating seconds.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    let parsed = NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()?;
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Minutes from `start` to `end`; a negative span is taken as crossing midnight.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = minutes_of_day(end) - minutes_of_day(start);
    if diff < 0 { diff + 24 * 60 } else { diff }
}

/// Parse a duration such as `8h`, `7h30m`, `45m`, `450` (minutes) or `07:30`.
pub fn parse_duration_to_minutes(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let invalid = || AppError::Config(format!("Invalid duration '{}'", s));

    if raw.is_empty() {
        return Err(invalid());
    }

    // HH:MM
    if let Some((h, m)) = raw.split_once(':') {
        let h: i64 = h.parse().map_err(|_| invalid())?;
        let m: i64 = m.parse().map_err(|_| invalid())?;
        if h < 0 || !(0..60).contains(&m) {
            return Err(invalid());
        }
        return h
            .checked_mul(60)
            .and_then(|v| v.checked_add(m))
            .ok_or_else(invalid);
    }

    // plain minutes
    if let Ok(m) = raw.parse::<i64>() {
        return if m >= 0 { Ok(m) } else { Err(invalid()) };
    }

    // XhYm / Xh / Ym
    let mut total = 0i64;
    let mut digits = String::new();
    let mut seen_unit = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                let n: i64 = digits.parse().map_err(|_| invalid())?;
                let step = if c == 'h' {
                    n.checked_mul(60).ok_or_else(invalid)?
                } else {
                    n
                };
                total = total.checked_add(step).ok_or_else(invalid)?;
                digits.clear();
                seen_unit = true;
            }
            ' ' => {}
            _ => return Err(invalid()),
        }
    }
    if !digits.is_empty() || !seen_unit {
        return Err(invalid());
    }
    Ok(total)
}
