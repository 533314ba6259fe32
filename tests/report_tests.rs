use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{entry_new, hhreg, init_db_with_march, init_test_db, setup_test_db, stdout_of};

#[test]
fn test_report_month_rows_and_balance() {
    let db_path = init_db_with_march("report_month_rows");

    let assert = hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("09:00 / 12:00 / 13:00 / 18:00"))
        .stdout(contains("08h 00m"))
        .stdout(contains("Vacation"))
        .stdout(contains("trip"));

    let out = stdout_of(&assert);
    let first = out.find("2024-03-01").expect("row for 2024-03-01");
    let second = out.find("2024-03-02").expect("row for 2024-03-02");
    assert!(first < second, "rows must be in date order");

    // 8h worked on an 8h target plus a vacation day: nothing owed
    assert!(out.contains("Total worked: 08h 00m | Balance: 00h 00m"));
}

#[test]
fn test_report_month_accepts_mm_yyyy() {
    let db_path = init_db_with_march("report_mm_yyyy");

    hhreg()
        .args(["--db", &db_path, "report", "month", "03/2024"])
        .assert()
        .success()
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-03-02"));
}

#[test]
fn test_report_month_excludes_other_months() {
    let db_path = init_db_with_march("report_other_months");
    entry_new(&db_path, &["-d", "2024-04-02", "08:00", "16:00"]);

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-04-02").not());
}

#[test]
fn test_report_month_empty() {
    let db_path = init_test_db("report_empty");

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("No day entries between 2024-05-01 and 2024-05-31."));
}

#[test]
fn test_report_month_negative_balance() {
    let db_path = init_test_db("report_negative");
    entry_new(&db_path, &["-d", "2024-03-04", "09:00", "15:30"]);

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("06h 30m"))
        .stdout(contains("-01h 30m"));
}

#[test]
fn test_report_fails_on_unpaired_day_anywhere() {
    let db_path = init_db_with_march("report_unpaired");
    // open clock-in in another month still blocks the March report
    entry_new(&db_path, &["-d", "2024-01-15", "09:00"]);

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Malformed ledger"))
        .stderr(contains("2024-01-15"))
        .stdout(contains("2024-03-01").not());
}

#[test]
fn test_report_recovers_after_override() {
    let db_path = init_db_with_march("report_after_override");
    entry_new(&db_path, &["-d", "2024-03-05", "09:00"]);

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .failure();

    hhreg()
        .args([
            "--db",
            &db_path,
            "entry",
            "override",
            "-d",
            "2024-03-05",
            "09:00",
            "17:00",
        ])
        .assert()
        .success();

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-05"));
}

#[test]
fn test_report_overnight_pair() {
    let db_path = init_test_db("report_overnight");
    entry_new(&db_path, &["-d", "2024-03-08", "22:00", "06:00"]);

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("08h 00m"));
}

#[test]
fn test_report_json() {
    let db_path = init_db_with_march("report_json");

    let assert = hhreg()
        .args(["--db", &db_path, "report", "month", "2024-03", "--json"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&assert)).expect("valid JSON report");

    let rows = report["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-03-01");
    assert_eq!(rows[0]["worked_minutes"], 480);
    assert_eq!(rows[0]["balance_minutes"], 0);
    assert_eq!(rows[1]["day_type"], "vacation");
    assert_eq!(rows[1]["display_text"], "trip");
    assert_eq!(report["total_worked_minutes"], 480);
}

#[test]
fn test_report_rejects_bad_month() {
    let db_path = init_test_db("report_bad_month");

    hhreg()
        .args(["--db", &db_path, "report", "month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("2024-13"));
}

#[test]
fn test_db_check_lists_unpaired_days() {
    let db_path = init_test_db("db_check_unpaired");
    entry_new(&db_path, &["-d", "2024-02-10", "09:00"]);

    hhreg()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("2024-02-10"))
        .stderr(contains("1 day(s) with unpaired time entries"));
}

#[test]
fn test_db_check_and_info_on_fresh_file() {
    let db_path = setup_test_db("db_check_fresh");

    hhreg()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("All time entries are paired"))
        .stdout(contains("Total days:"));
}

#[test]
fn test_config_database_prints_path() {
    let db_path = init_test_db("config_database");

    hhreg()
        .args(["--db", &db_path, "config", "--database"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()));
}
