use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// One row per calendar day.
fn create_day_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS day_entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL UNIQUE,
            day_type      TEXT NOT NULL DEFAULT 'work'
                          CHECK(day_type IN ('work','weekend','sick','holiday','vacation')),
            justification TEXT,
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Clock values of a day; `seq` keeps the order they were entered in.
fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            day_id  INTEGER NOT NULL REFERENCES day_entries(id) ON DELETE CASCADE,
            seq     INTEGER NOT NULL,
            time    TEXT NOT NULL,
            UNIQUE(day_id, seq)
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_add_range_indexes(conn: &Connection) -> Result<()> {
    let version = "20240301_0001_ledger_indexes";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_day_entries_date ON day_entries(date);
        CREATE INDEX IF NOT EXISTS idx_time_entries_day_seq ON time_entries(day_id, seq);
        "#,
    )?;

    mark_applied(conn, version, "Added ledger lookup indexes")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "day_entries")? {
        create_day_entries_table(conn)?;
        success("Created day_entries table.");
    }

    if !table_exists(conn, "time_entries")? {
        create_time_entries_table(conn)?;
        success("Created time_entries table.");
    }

    migrate_add_range_indexes(conn)?;

    Ok(())
}
