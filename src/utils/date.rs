use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, also accepting `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

/// `YYYY-MM` or `MM/YYYY` → (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let s = s.trim();

    // YYYY-MM
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Some((d.year(), d.month()));
    }

    // MM/YYYY
    if let Some((m, y)) = s.split_once('/')
        && let (Ok(month), Ok(year)) = (m.trim().parse::<u32>(), y.trim().parse::<i32>())
        && NaiveDate::from_ymd_opt(year, month, 1).is_some()
    {
        return Some((year, month));
    }

    None
}

/// First and last calendar day of a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

pub fn weekday_short(d: &NaiveDate) -> String {
    d.format("%a").to_string()
}
