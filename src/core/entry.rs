use crate::db::repository::TimeRepository;
use crate::errors::AppResult;
use crate::models::day_record::UpsertOutcome;
use crate::models::day_type::DayType;
use crate::models::time_event::{TimeEvent, parse_time_events};
use chrono::NaiveDate;

/// What `entry new` did to the ledger.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub outcome: UpsertOutcome,
    pub appended: Vec<TimeEvent>,
}

/// First-write path: day shells and appended clock events.
pub struct EntryLogic;

impl EntryLogic {
    /// Create the day, or hand back the one already stored for `date`
    /// (first write wins: its type and justification are kept).
    pub fn create_day<R: TimeRepository + ?Sized>(
        repo: &mut R,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
    ) -> AppResult<UpsertOutcome> {
        repo.get_or_create_day(date, justification, day_type)
    }

    /// Parse the whole batch, then append it in the given order.
    /// One bad token means nothing is written.
    pub fn add_time_events<R: TimeRepository + ?Sized, S: AsRef<str>>(
        repo: &mut R,
        day_id: i64,
        raw_times: &[S],
    ) -> AppResult<Vec<TimeEvent>> {
        let events = parse_time_events(raw_times)?;
        repo.create_time(day_id, &events)?;
        Ok(events)
    }

    /// `entry new`: validate every token before the day shell is touched,
    /// then create the day and append in a single store operation.
    pub fn new_entry<R: TimeRepository + ?Sized, S: AsRef<str>>(
        repo: &mut R,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
        raw_times: &[S],
    ) -> AppResult<NewEntry> {
        let events = parse_time_events(raw_times)?;

        let outcome = repo.create_day_with_times(date, justification, day_type, &events)?;

        Ok(NewEntry {
            outcome,
            appended: events,
        })
    }
}
