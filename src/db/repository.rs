//! Ledger repository contract and its SQLite implementation.
//!
//! The services in `core` only talk to [`TimeRepository`]; they never see a
//! connection. Every mutating call is one transaction from the caller's
//! point of view.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayRecord, UpsertOutcome};
use crate::models::day_type::DayType;
use crate::models::time_event::TimeEvent;
use chrono::NaiveDate;

pub trait TimeRepository {
    /// Return the record for `date`, creating the shell when missing.
    /// An existing record is returned untouched.
    fn get_or_create_day(
        &mut self,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
    ) -> AppResult<UpsertOutcome>;

    fn get_day_entry(&self, date: NaiveDate) -> AppResult<Option<DayRecord>>;

    /// Append events to a day, in order, all or nothing.
    fn create_time(&mut self, day_id: i64, events: &[TimeEvent]) -> AppResult<()>;

    /// Create-or-find the day and append `events` to it as one unit.
    ///
    /// Stores with transactions should override this so a failed append
    /// never leaves a freshly created, empty day behind.
    fn create_day_with_times(
        &mut self,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
        events: &[TimeEvent],
    ) -> AppResult<UpsertOutcome> {
        let outcome = self.get_or_create_day(date, justification, day_type)?;
        self.create_time(outcome.record().id, events)?;
        Ok(outcome)
    }

    /// Replace metadata and events of a day in one step.
    fn override_day_entry(
        &mut self,
        day_id: i64,
        justification: Option<&str>,
        day_type: DayType,
        events: &[TimeEvent],
    ) -> AppResult<()>;

    /// Records in `[start, end]`, ascending by date.
    fn get_day_entries(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>>;

    fn get_all_day_entries(&self) -> AppResult<Vec<DayRecord>>;
}

/// SQLite-backed ledger.
pub struct SqliteLedger {
    pool: DbPool,
}

impl SqliteLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl TimeRepository for SqliteLedger {
    fn get_or_create_day(
        &mut self,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
    ) -> AppResult<UpsertOutcome> {
        if let Some(existing) = queries::load_day_by_date(&self.pool.conn, &date)? {
            return Ok(UpsertOutcome::Found(existing));
        }

        let id = queries::insert_day(&self.pool.conn, &date, justification, day_type)?;
        let created = queries::load_day_by_id(&self.pool.conn, id)?
            .ok_or_else(|| AppError::Other(format!("Day entry {} vanished after insert", id)))?;

        Ok(UpsertOutcome::Created(created))
    }

    fn get_day_entry(&self, date: NaiveDate) -> AppResult<Option<DayRecord>> {
        queries::load_day_by_date(&self.pool.conn, &date)
    }

    fn create_time(&mut self, day_id: i64, events: &[TimeEvent]) -> AppResult<()> {
        if events.is_empty() {
            return Ok(());
        }

        let tx = self.pool.conn.transaction()?;
        queries::append_time_events(&tx, day_id, events)?;
        tx.commit()?;
        Ok(())
    }

    fn create_day_with_times(
        &mut self,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
        events: &[TimeEvent],
    ) -> AppResult<UpsertOutcome> {
        let tx = self.pool.conn.transaction()?;

        let outcome = match queries::load_day_by_date(&tx, &date)? {
            Some(existing) => UpsertOutcome::Found(existing),
            None => {
                let id = queries::insert_day(&tx, &date, justification, day_type)?;
                let created = queries::load_day_by_id(&tx, id)?.ok_or_else(|| {
                    AppError::Other(format!("Day entry {} vanished after insert", id))
                })?;
                UpsertOutcome::Created(created)
            }
        };

        // an error here drops tx → the new day is rolled back too
        queries::append_time_events(&tx, outcome.record().id, events)?;

        tx.commit()?;
        Ok(outcome)
    }

    fn override_day_entry(
        &mut self,
        day_id: i64,
        justification: Option<&str>,
        day_type: DayType,
        events: &[TimeEvent],
    ) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;

        if queries::update_day(&tx, day_id, justification, day_type)? == 0 {
            // tx dropped here → rollback
            return Err(AppError::Other(format!("No day entry with id {}", day_id)));
        }

        queries::delete_time_events(&tx, day_id)?;
        queries::append_time_events(&tx, day_id, events)?;

        tx.commit()?;
        Ok(())
    }

    fn get_day_entries(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>> {
        queries::load_days_in_range(&self.pool.conn, &start, &end)
    }

    fn get_all_day_entries(&self) -> AppResult<Vec<DayRecord>> {
        queries::load_all_days(&self.pool.conn)
    }
}
