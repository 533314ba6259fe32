//! Services driven through an in-memory repository.

use chrono::{NaiveDate, NaiveTime};
use hhreg::core::calculator::balance::{Baseline, BaselinePolicy, calculate_balance};
use hhreg::core::calculator::worked::{calculate_worked, is_paired};
use hhreg::core::entry::EntryLogic;
use hhreg::core::integrity::{IntegrityLogic, LedgerScope};
use hhreg::core::override_day::OverrideLogic;
use hhreg::core::report::ReportLogic;
use hhreg::db::repository::TimeRepository;
use hhreg::errors::{AppError, AppResult};
use hhreg::models::day_record::{DayRecord, UpsertOutcome};
use hhreg::models::day_type::DayType;
use hhreg::models::time_event::{TimeEvent, parse_time_events};
use std::collections::BTreeMap;

#[derive(Default)]
struct MemoryLedger {
    next_id: i64,
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl MemoryLedger {
    fn by_id(&mut self, id: i64) -> AppResult<&mut DayRecord> {
        self.days
            .values_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::Other(format!("no day {}", id)))
    }
}

impl TimeRepository for MemoryLedger {
    fn get_or_create_day(
        &mut self,
        date: NaiveDate,
        justification: Option<&str>,
        day_type: DayType,
    ) -> AppResult<UpsertOutcome> {
        if let Some(d) = self.days.get(&date) {
            return Ok(UpsertOutcome::Found(d.clone()));
        }
        self.next_id += 1;
        let record = DayRecord {
            id: self.next_id,
            date,
            day_type,
            justification: justification.map(str::to_string),
            time_events: Vec::new(),
        };
        self.days.insert(date, record.clone());
        Ok(UpsertOutcome::Created(record))
    }

    fn get_day_entry(&self, date: NaiveDate) -> AppResult<Option<DayRecord>> {
        Ok(self.days.get(&date).cloned())
    }

    fn create_time(&mut self, day_id: i64, events: &[TimeEvent]) -> AppResult<()> {
        self.by_id(day_id)?.time_events.extend_from_slice(events);
        Ok(())
    }

    fn override_day_entry(
        &mut self,
        day_id: i64,
        justification: Option<&str>,
        day_type: DayType,
        events: &[TimeEvent],
    ) -> AppResult<()> {
        let day = self.by_id(day_id)?;
        day.justification = justification.map(str::to_string);
        day.day_type = day_type;
        day.time_events = events.to_vec();
        Ok(())
    }

    fn get_day_entries(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayRecord>> {
        Ok(self.days.range(start..=end).map(|(_, d)| d.clone()).collect())
    }

    fn get_all_day_entries(&self) -> AppResult<Vec<DayRecord>> {
        Ok(self.days.values().cloned().collect())
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ev(s: &str) -> TimeEvent {
    TimeEvent::parse(s).unwrap()
}

fn policy() -> BaselinePolicy {
    BaselinePolicy::new(8 * 60)
}

#[test]
fn test_time_event_parsing() {
    assert_eq!(ev("09:05").minutes(), 9 * 60 + 5);
    assert_eq!(ev("9:05").to_string(), "09:05");
    assert_eq!(ev("23:59:59").to_string(), "23:59");
    assert_eq!(ev("-00:00").time(), NaiveTime::MIN);

    assert!(matches!(
        TimeEvent::parse("25:00"),
        Err(AppError::MalformedTimeInput(_))
    ));
    assert!(matches!(
        TimeEvent::parse("abc"),
        Err(AppError::MalformedTimeInput(_))
    ));
    assert!(matches!(
        TimeEvent::parse(""),
        Err(AppError::MalformedTimeInput(_))
    ));
    assert!(matches!(
        TimeEvent::parse("-01:00"),
        Err(AppError::InvalidTimeValue(_))
    ));

    assert!(parse_time_events(&["09:00", "x", "10:00"]).is_err());
}

#[test]
fn test_worked_minutes() {
    let full = [ev("09:00"), ev("12:00"), ev("13:00"), ev("18:00")];
    assert!(is_paired(&full));
    assert_eq!(calculate_worked(&full), Some(480));

    assert_eq!(calculate_worked(&[]), Some(0));
    assert_eq!(calculate_worked(&[ev("09:00")]), None);

    // crosses midnight
    assert_eq!(calculate_worked(&[ev("22:00"), ev("02:30")]), Some(270));
    // zero-length pair
    assert_eq!(calculate_worked(&[ev("10:00"), ev("10:00")]), Some(0));
}

#[test]
fn test_baseline_policy() {
    let p = policy();
    assert_eq!(p.baseline_for(DayType::Work), 480);
    assert_eq!(p.baseline_for(DayType::Vacation), 0);
    assert_eq!(p.baseline_for(DayType::Weekend), 0);

    let p = p.with_baseline(DayType::Sick, Baseline::Target);
    assert_eq!(p.baseline_for(DayType::Sick), 480);

    let p = p.with_baseline(DayType::Holiday, Baseline::parse("4h").unwrap());
    assert_eq!(p.baseline_for(DayType::Holiday), 240);

    assert_eq!(calculate_balance(450, 480), -30);
    assert!(Baseline::parse("soon").is_err());
}

#[test]
fn test_new_entry_first_write_wins() {
    let mut repo = MemoryLedger::default();

    let first = EntryLogic::new_entry(
        &mut repo,
        day("2024-03-01"),
        None,
        DayType::Work,
        &["09:00", "12:00"],
    )
    .unwrap();
    let second = EntryLogic::new_entry(
        &mut repo,
        day("2024-03-01"),
        Some("flu"),
        DayType::Sick,
        &["13:00", "18:00"],
    )
    .unwrap();

    assert!(first.outcome.was_created());
    assert!(!second.outcome.was_created());
    assert!(
        !EntryLogic::create_day(&mut repo, day("2024-03-01"), None, DayType::Holiday)
            .unwrap()
            .was_created()
    );
    assert_eq!(first.outcome.record().id, second.outcome.record().id);

    let stored = repo.get_day_entry(day("2024-03-01")).unwrap().unwrap();
    assert_eq!(stored.day_type, DayType::Work);
    assert_eq!(stored.justification, None);
    assert_eq!(stored.display_text(), "09:00 / 12:00 / 13:00 / 18:00");
}

#[test]
fn test_new_entry_rejects_before_touching_repo() {
    let mut repo = MemoryLedger::default();

    let err = EntryLogic::new_entry(
        &mut repo,
        day("2024-03-01"),
        None,
        DayType::Work,
        &["09:00", "-01:00"],
    )
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidTimeValue(_)));
    assert!(repo.days.is_empty());
}

#[test]
fn test_override_requires_existing_day() {
    let mut repo = MemoryLedger::default();

    let err =
        OverrideLogic::override_day(&mut repo, day("2024-03-01"), None, DayType::Work, &["09:00"])
            .unwrap_err();
    assert!(matches!(err, AppError::DayNotFound(_)));
    assert!(repo.days.is_empty());
}

#[test]
fn test_integrity_scope() {
    let mut repo = MemoryLedger::default();
    EntryLogic::new_entry(&mut repo, day("2024-01-15"), None, DayType::Work, &["09:00"])
        .unwrap();
    EntryLogic::new_entry(
        &mut repo,
        day("2024-03-10"),
        Some("odd"),
        DayType::Sick,
        &["10:00"],
    )
    .unwrap();
    EntryLogic::new_entry(
        &mut repo,
        day("2024-03-01"),
        None,
        DayType::Work,
        &["09:00", "17:00"],
    )
    .unwrap();

    // any type with events must be paired
    assert_eq!(
        IntegrityLogic::find_invalid_days(&repo, LedgerScope::All).unwrap(),
        vec![day("2024-01-15"), day("2024-03-10")]
    );
    assert_eq!(
        IntegrityLogic::find_invalid_days(
            &repo,
            LedgerScope::Range(day("2024-03-01"), day("2024-03-31"))
        )
        .unwrap(),
        vec![day("2024-03-10")]
    );

    match IntegrityLogic::check_invalid_time_entries(&repo, LedgerScope::All) {
        Err(AppError::MalformedLedger(dates)) => assert_eq!(dates.len(), 2),
        other => panic!("expected malformed ledger, got {:?}", other),
    }
}

#[test]
fn test_month_report_running_balance() {
    let mut repo = MemoryLedger::default();
    let add = |repo: &mut MemoryLedger, d: &str, t: DayType, j: Option<&str>, times: &[&str]| {
        EntryLogic::new_entry(repo, day(d), j, t, times).unwrap();
    };

    add(&mut repo, "2024-03-04", DayType::Work, None, &["09:00", "18:30"]);
    add(&mut repo, "2024-03-01", DayType::Work, None, &["09:00", "16:00"]);
    add(&mut repo, "2024-03-02", DayType::Weekend, Some("sat"), &[]);
    add(&mut repo, "2024-02-29", DayType::Work, None, &["09:00", "17:00"]);

    let report = ReportLogic::build_month_report(&repo, 2024, 3, &policy()).unwrap();

    let dates: Vec<NaiveDate> = report.rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![day("2024-03-01"), day("2024-03-02"), day("2024-03-04")]
    );

    let balances: Vec<i64> = report.rows.iter().map(|r| r.balance_minutes).collect();
    assert_eq!(balances, vec![-60, 0, 90]);

    let running: Vec<i64> = report
        .rows
        .iter()
        .map(|r| r.running_balance_minutes)
        .collect();
    assert_eq!(running, vec![-60, -60, 30]);

    assert_eq!(report.rows[1].display_text, "sat");
    assert_eq!(report.total_worked_minutes, 420 + 570);
    assert_eq!(report.total_balance_minutes, 30);
    assert_eq!(report.start, day("2024-03-01"));
    assert_eq!(report.end, day("2024-03-31"));
}

#[test]
fn test_report_blocked_by_unpaired_day_outside_month() {
    let mut repo = MemoryLedger::default();
    EntryLogic::new_entry(
        &mut repo,
        day("2024-03-01"),
        None,
        DayType::Work,
        &["09:00", "17:00"],
    )
    .unwrap();
    EntryLogic::new_entry(&mut repo, day("2023-12-31"), None, DayType::Work, &["09:00"])
        .unwrap();

    let err = ReportLogic::build_month_report(&repo, 2024, 3, &policy()).unwrap_err();
    assert!(matches!(err, AppError::MalformedLedger(ref d) if d == &vec![day("2023-12-31")]));
}

#[test]
fn test_aggregate_is_pure() {
    let days = vec![DayRecord {
        id: 1,
        date: day("2024-03-01"),
        day_type: DayType::Vacation,
        justification: Some("trip".into()),
        time_events: Vec::new(),
    }];

    let report =
        ReportLogic::aggregate(&days, day("2024-03-01"), day("2024-03-31"), &policy()).unwrap();
    assert!(days[0].is_blank());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].worked_minutes, 0);
    assert_eq!(report.rows[0].balance_minutes, 0);

    let empty =
        ReportLogic::aggregate(&[], day("2024-03-01"), day("2024-03-31"), &policy()).unwrap();
    assert!(empty.is_empty());
}
