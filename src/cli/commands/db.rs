use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::integrity::{IntegrityLogic, LedgerScope};
use crate::db::log::ttlog_or_warn;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::repository::SqliteLedger;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // one connection for every requested action; check and info need the
        // schema, so a never-initialized file is migrated first
        let mut ledger = if *check || *info {
            SqliteLedger::open(&cfg.database)?
        } else {
            SqliteLedger::new(DbPool::new(&cfg.database)?)
        };

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&ledger.pool().conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *info {
            stats::print_db_info(ledger.pool_mut(), &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                ledger
                    .pool()
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }

            let unpaired = IntegrityLogic::find_invalid_days(&ledger, LedgerScope::All)?;
            if unpaired.is_empty() {
                println!("{}✔ All time entries are paired.{}\n", GREEN, RESET);
            } else {
                error(format!(
                    "{} day(s) with unpaired time entries (fix them with `entry override`):",
                    unpaired.len()
                ));
                for d in &unpaired {
                    println!("    {}{}{}", YELLOW, d.format("%Y-%m-%d"), RESET);
                }
                println!();
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            ledger.pool().conn.execute_batch("VACUUM;")?;
            ttlog_or_warn(&ledger.pool().conn, "vacuum", "", "Database optimized");
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
