use super::day_type::DayType;
use chrono::NaiveDate;
use serde::Serialize;

/// One aggregated line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub display_text: String,
    pub worked_minutes: i64,
    pub balance_minutes: i64,
    /// Cumulative balance up to and including this row.
    pub running_balance_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub total_worked_minutes: i64,
    pub total_balance_minutes: i64,
}

impl MonthReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
