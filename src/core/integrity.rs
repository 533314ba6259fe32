//! Gate run before any report: no aggregation over unpaired days.

use crate::db::repository::TimeRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerScope {
    All,
    Range(NaiveDate, NaiveDate),
}

pub struct IntegrityLogic;

impl IntegrityLogic {
    /// Dates whose event list has an open clock-in, ascending.
    ///
    /// Any day carrying events is checked, whatever its type.
    pub fn find_invalid_days<R: TimeRepository + ?Sized>(
        repo: &R,
        scope: LedgerScope,
    ) -> AppResult<Vec<NaiveDate>> {
        let days = match scope {
            LedgerScope::All => repo.get_all_day_entries()?,
            LedgerScope::Range(start, end) => repo.get_day_entries(start, end)?,
        };
        Ok(invalid_dates(&days))
    }

    /// Fail with [`AppError::MalformedLedger`] naming every bad date.
    pub fn check_invalid_time_entries<R: TimeRepository + ?Sized>(
        repo: &R,
        scope: LedgerScope,
    ) -> AppResult<()> {
        let invalid = Self::find_invalid_days(repo, scope)?;
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(AppError::MalformedLedger(invalid))
        }
    }
}

pub(crate) fn invalid_dates(days: &[DayRecord]) -> Vec<NaiveDate> {
    let mut out: Vec<NaiveDate> = days
        .iter()
        .filter(|d| !d.is_well_formed())
        .map(|d| d.date)
        .collect();
    out.sort();
    out
}
