use crate::cli::parser::{EntryArgs, EntryCommands};
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::override_day::OverrideLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::repository::SqliteLedger;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::join_events;
use crate::models::day_type::DayType;
use crate::models::time_event::parse_time_events;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RESET, YELLOW};
use crate::utils::date;
use chrono::NaiveDate;

/// Command input after shape validation: this is all the engine gets to see.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub justification: Option<String>,
    pub entries: Vec<String>,
}

/// Check the arguments before any database work.
pub fn validate(args: &EntryArgs) -> AppResult<EntryInput> {
    let date = if args.today {
        date::today()
    } else {
        let raw = args.day.as_ref().ok_or_else(|| {
            AppError::MissingInput(
                "You should inform a day to log (or set entry as today with -t).".into(),
            )
        })?;
        date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
    };

    if args.entries.is_empty() && args.justification.is_none() {
        return Err(AppError::MissingInput(
            "You should inform at least one time entry or set a justification with -j.".into(),
        ));
    }

    parse_time_events(&args.entries)?;

    Ok(EntryInput {
        date,
        day_type: args.day_type,
        justification: args.justification.clone(),
        entries: args.entries.clone(),
    })
}

pub fn handle(action: &EntryCommands, cfg: &Config) -> AppResult<()> {
    match action {
        EntryCommands::New(args) => handle_new(&validate(args)?, cfg),
        EntryCommands::Override(args) => handle_override(&validate(args)?, cfg),
    }
}

fn handle_new(input: &EntryInput, cfg: &Config) -> AppResult<()> {
    let mut ledger = SqliteLedger::open(&cfg.database)?;

    let result = EntryLogic::new_entry(
        &mut ledger,
        input.date,
        input.justification.as_deref(),
        input.day_type,
        &input.entries,
    )?;

    let day = result.outcome.record();
    let date_str = day.date_str();

    ttlog_or_warn(
        &ledger.pool().conn,
        "new",
        &date_str,
        &format!(
            "{} entr{} appended ({})",
            result.appended.len(),
            if result.appended.len() == 1 { "y" } else { "ies" },
            if result.outcome.was_created() {
                "day created"
            } else {
                "existing day"
            }
        ),
    );

    let day_text = if input.day_type.is_work() {
        join_events(&result.appended)
    } else {
        input.justification.clone().unwrap_or_default()
    };

    println!("Day entry {GREEN}SUCCESSFULLY{RESET} created!");
    println!("{YELLOW}{}{RESET}: {}", date_str, day_text);

    if !result.outcome.was_created() {
        info(format!(
            "{} already existed as {}: its type and justification were kept.",
            date_str, day.day_type
        ));
    }

    Ok(())
}

fn handle_override(input: &EntryInput, cfg: &Config) -> AppResult<()> {
    let mut ledger = SqliteLedger::open(&cfg.database)?;

    let day = OverrideLogic::override_day(
        &mut ledger,
        input.date,
        input.justification.as_deref(),
        input.day_type,
        &input.entries,
    )?;

    let date_str = day.date_str();

    ttlog_or_warn(
        &ledger.pool().conn,
        "override",
        &date_str,
        &format!(
            "Day replaced: {} with {} entries",
            day.day_type,
            day.time_events.len()
        ),
    );

    println!("Day entry {GREEN}SUCCESSFULLY{RESET} overridden!");
    println!("{YELLOW}{}{RESET}: {}", date_str, day.display_text());

    Ok(())
}
