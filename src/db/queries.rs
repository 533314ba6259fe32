use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::day_type::DayType;
use crate::models::time_event::TimeEvent;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DAY_COLUMNS: &str = "id, date, day_type, justification";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

/// Map a `day_entries` row; events are loaded separately.
pub fn map_day_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let type_str: String = row.get("day_type")?;
    let day_type = DayType::from_db_str(&type_str)
        .ok_or_else(|| conversion_error(AppError::InvalidDayType(type_str.clone())))?;

    Ok(DayRecord {
        id: row.get("id")?,
        date,
        day_type,
        justification: row.get("justification")?,
        time_events: Vec::new(),
    })
}

fn map_time_row(row: &Row) -> Result<TimeEvent> {
    let time_str: String = row.get("time")?;
    TimeEvent::from_db_str(&time_str)
        .ok_or_else(|| conversion_error(AppError::MalformedTimeInput(time_str.clone())))
}

/// Load the events of a day in the order they were entered.
pub fn load_time_events(conn: &Connection, day_id: i64) -> AppResult<Vec<TimeEvent>> {
    let mut stmt =
        conn.prepare_cached("SELECT time FROM time_entries WHERE day_id = ?1 ORDER BY seq ASC")?;
    let rows = stmt.query_map([day_id], map_time_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn with_events(conn: &Connection, mut day: DayRecord) -> AppResult<DayRecord> {
    day.time_events = load_time_events(conn, day.id)?;
    Ok(day)
}

fn collect_days(conn: &Connection, days: Vec<DayRecord>) -> AppResult<Vec<DayRecord>> {
    days.into_iter().map(|d| with_events(conn, d)).collect()
}

pub fn load_day_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
    let sql = format!("SELECT {} FROM day_entries WHERE date = ?1", DAY_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    let day = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_day_row)
        .optional()?;

    day.map(|d| with_events(conn, d)).transpose()
}

pub fn load_day_by_id(conn: &Connection, id: i64) -> AppResult<Option<DayRecord>> {
    let sql = format!("SELECT {} FROM day_entries WHERE id = ?1", DAY_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    let day = stmt.query_row([id], map_day_row).optional()?;

    day.map(|d| with_events(conn, d)).transpose()
}

/// Days in `[start, end]`, ascending by date.
pub fn load_days_in_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DayRecord>> {
    let sql = format!(
        "SELECT {} FROM day_entries WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC",
        DAY_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_day_row,
    )?;

    let mut days = Vec::new();
    for r in rows {
        days.push(r?);
    }
    collect_days(conn, days)
}

pub fn load_all_days(conn: &Connection) -> AppResult<Vec<DayRecord>> {
    let sql = format!("SELECT {} FROM day_entries ORDER BY date ASC", DAY_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_day_row)?;

    let mut days = Vec::new();
    for r in rows {
        days.push(r?);
    }
    collect_days(conn, days)
}

/// Insert a new day shell and return its id.
pub fn insert_day(
    conn: &Connection,
    date: &NaiveDate,
    justification: Option<&str>,
    day_type: DayType,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO day_entries (date, day_type, justification, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            date.format("%Y-%m-%d").to_string(),
            day_type.to_db_str(),
            justification,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite a day's metadata. Returns the number of rows touched.
pub fn update_day(
    conn: &Connection,
    day_id: i64,
    justification: Option<&str>,
    day_type: DayType,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE day_entries SET day_type = ?1, justification = ?2 WHERE id = ?3",
        params![day_type.to_db_str(), justification, day_id],
    )?;
    Ok(n)
}

pub fn delete_time_events(conn: &Connection, day_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM time_entries WHERE day_id = ?1", [day_id])?;
    Ok(n)
}

/// Append events after the last existing `seq` of the day.
pub fn append_time_events(conn: &Connection, day_id: i64, events: &[TimeEvent]) -> AppResult<()> {
    let next: i64 = conn.query_row(
        "SELECT COALESCE(MAX(seq), -1) + 1 FROM time_entries WHERE day_id = ?1",
        [day_id],
        |row| row.get(0),
    )?;

    let mut stmt =
        conn.prepare_cached("INSERT INTO time_entries (day_id, seq, time) VALUES (?1, ?2, ?3)")?;
    for (offset, ev) in events.iter().enumerate() {
        stmt.execute(params![day_id, next + offset as i64, ev.to_db_str()])?;
    }
    Ok(())
}
