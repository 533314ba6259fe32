use super::{day_type::DayType, time_event::TimeEvent};
use crate::core::calculator::worked;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub id: i64,                       // ⇔ day_entries.id
    pub date: NaiveDate,               // ⇔ day_entries.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub day_type: DayType,             // ⇔ day_entries.day_type
    pub justification: Option<String>, // ⇔ day_entries.justification (NULL allowed)
    pub time_events: Vec<TimeEvent>,   // ⇔ time_entries ordered by seq
}

impl DayRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// A whole-day entry with no clock events (e.g. a vacation day).
    pub fn is_blank(&self) -> bool {
        self.time_events.is_empty() && self.justification.is_some()
    }

    pub fn is_well_formed(&self) -> bool {
        worked::is_paired(&self.time_events)
    }

    /// Worked minutes, or `None` when the day has an unterminated clock-in.
    pub fn worked_minutes(&self) -> Option<i64> {
        worked::calculate_worked(&self.time_events)
    }

    /// Entries joined for work days, justification otherwise.
    pub fn display_text(&self) -> String {
        if self.day_type.is_work() && !self.time_events.is_empty() {
            join_events(&self.time_events)
        } else {
            self.justification.clone().unwrap_or_default()
        }
    }
}

pub fn join_events(events: &[TimeEvent]) -> String {
    events
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Result of the idempotent day creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(DayRecord),
    Found(DayRecord),
}

impl UpsertOutcome {
    pub fn record(&self) -> &DayRecord {
        match self {
            UpsertOutcome::Created(r) | UpsertOutcome::Found(r) => r,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, UpsertOutcome::Created(_))
    }
}
