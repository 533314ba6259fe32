use crate::db::repository::TimeRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_type::DayType;
use crate::models::time_event::parse_time_events;
use chrono::NaiveDate;

/// Correction path: replace a stored day as a whole.
pub struct OverrideLogic;

impl OverrideLogic {
    /// Replace type, justification and events of an existing day.
    ///
    /// Fields are not merged: whatever is not resupplied is gone afterwards.
    /// Fails with [`AppError::DayNotFound`] when `date` was never created.
    pub fn override_day<R: TimeRepository + ?Sized, S: AsRef<str>>(
        repo: &mut R,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
        raw_times: &[S],
    ) -> AppResult<DayRecord> {
        let events = parse_time_events(raw_times)?;

        let existing = repo
            .get_day_entry(date)?
            .ok_or(AppError::DayNotFound(date))?;

        repo.override_day_entry(existing.id, justification, day_type, &events)?;

        Ok(DayRecord {
            id: existing.id,
            date,
            day_type,
            justification: justification.map(str::to_string),
            time_events: events,
        })
    }
}
