use crate::core::calculator::balance::{BaselinePolicy, calculate_balance};
use crate::core::integrity::{IntegrityLogic, LedgerScope, invalid_dates};
use crate::db::repository::TimeRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::report::{MonthReport, ReportRow};
use crate::utils::date::month_bounds;
use chrono::NaiveDate;

pub struct ReportLogic;

impl ReportLogic {
    /// Report for `[start, end]`.
    ///
    /// The whole ledger must pass the integrity gate first; on failure
    /// nothing is aggregated. Dates without a record produce no row.
    pub fn build_report<R: TimeRepository + ?Sized>(
        repo: &R,
        start: NaiveDate,
        end: NaiveDate,
        policy: &BaselinePolicy,
    ) -> AppResult<MonthReport> {
        IntegrityLogic::check_invalid_time_entries(repo, LedgerScope::All)?;

        let days = repo.get_day_entries(start, end)?;
        Self::aggregate(&days, start, end, policy)
    }

    pub fn build_month_report<R: TimeRepository + ?Sized>(
        repo: &R,
        year: i32,
        month: u32,
        policy: &BaselinePolicy,
    ) -> AppResult<MonthReport> {
        let (start, end) = month_bounds(year, month)
            .ok_or_else(|| AppError::InvalidMonth(format!("{:04}-{:02}", year, month)))?;
        Self::build_report(repo, start, end, policy)
    }

    /// Pure aggregation over already loaded records.
    pub fn aggregate(
        days: &[DayRecord],
        start: NaiveDate,
        end: NaiveDate,
        policy: &BaselinePolicy,
    ) -> AppResult<MonthReport> {
        let invalid = invalid_dates(days);
        if !invalid.is_empty() {
            return Err(AppError::MalformedLedger(invalid));
        }

        let mut in_range: Vec<&DayRecord> = days
            .iter()
            .filter(|d| d.date >= start && d.date <= end)
            .collect();
        in_range.sort_by_key(|d| d.date);

        let mut rows = Vec::with_capacity(in_range.len());
        let mut total_worked = 0;
        let mut running = 0;

        for day in in_range {
            // well-formed: checked above
            let worked = day.worked_minutes().unwrap_or_default();
            let balance = calculate_balance(worked, policy.baseline_for(day.day_type));

            total_worked += worked;
            running += balance;

            rows.push(ReportRow {
                date: day.date,
                day_type: day.day_type,
                display_text: day.display_text(),
                worked_minutes: worked,
                balance_minutes: balance,
                running_balance_minutes: running,
            });
        }

        Ok(MonthReport {
            start,
            end,
            rows,
            total_worked_minutes: total_worked,
            total_balance_minutes: running,
        })
    }
}
