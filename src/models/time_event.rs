use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_of_day, parse_time};
use chrono::NaiveTime;
use std::fmt;

/// A single clock value of a day. Position decides its role:
/// even index = clock-in, odd index = clock-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeEvent {
    time: NaiveTime, // ⇔ time_entries.time (TEXT "HH:MM")
}

impl TimeEvent {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Parse a user token.
    ///
    /// - `"-01:00"` parses but is negative → [`AppError::InvalidTimeValue`]
    /// - `"25:00"`, `"abc"`, `""` → [`AppError::MalformedTimeInput`]
    pub fn parse(token: &str) -> AppResult<Self> {
        let raw = token.trim();
        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, raw),
        };

        let time =
            parse_time(body).ok_or_else(|| AppError::MalformedTimeInput(token.to_string()))?;

        // "-00:00" is zero, not negative
        if negative && time != NaiveTime::MIN {
            return Err(AppError::InvalidTimeValue(token.to_string()));
        }

        Ok(Self { time })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Offset from midnight, always in `0..1440`.
    pub fn minutes(&self) -> i64 {
        minutes_of_day(self.time)
    }

    pub fn to_db_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        parse_time(s).map(Self::new)
    }
}

impl fmt::Display for TimeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M"))
    }
}

/// Parse a whole batch of tokens. The first bad token aborts the batch,
/// so callers never see a partially parsed list.
pub fn parse_time_events<S: AsRef<str>>(tokens: &[S]) -> AppResult<Vec<TimeEvent>> {
    tokens.iter().map(|t| TimeEvent::parse(t.as_ref())).collect()
}
