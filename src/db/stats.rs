use crate::db::pool::DbPool;
use crate::models::day_type::DayType;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM day_entries", [], |row| row.get(0))?;
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    println!("{}• Total days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);
    println!(
        "{}• Total time entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );

    //
    // 3) DAYS PER TYPE
    //
    println!("{}• Days per type:{}", CYAN, RESET);
    let mut stmt = pool
        .conn
        .prepare("SELECT COUNT(*) FROM day_entries WHERE day_type = ?1")?;
    for t in DayType::ALL {
        let n: i64 = stmt.query_row([t.to_db_str()], |row| row.get(0))?;
        println!("    {:<9} {}", t.label(), n);
    }

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM day_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM day_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) AVERAGE ENTRIES/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date) {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let span = (d2 - d1).num_days() + 1;

        let avg = entries as f64 / days.max(1) as f64;
        println!("{}• Logged days in span:{} {} / {}", CYAN, RESET, days, span);
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
