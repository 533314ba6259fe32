use crate::cli::parser::ReportCommands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::repository::SqliteLedger;
use crate::errors::{AppError, AppResult};
use crate::models::report::MonthReport;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_balance;
use crate::utils::date;
use crate::utils::formatting::{bold, day_type_color, mins2readable};
use crate::utils::table::{Cell, Column, Table};

pub fn handle(action: &ReportCommands, cfg: &Config) -> AppResult<()> {
    match action {
        ReportCommands::Month { month, json } => {
            let (year, m) =
                date::parse_month(month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;
            let policy = cfg.baseline_policy()?;

            let ledger = SqliteLedger::open(&cfg.database)?;
            let report = ReportLogic::build_month_report(&ledger, year, m, &policy)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, cfg.show_weekday);
            }
        }
    }

    Ok(())
}

fn print_report(report: &MonthReport, show_weekday: bool) {
    header(format!("Report {}", report.start.format("%B %Y")));

    if report.is_empty() {
        info(format!(
            "No day entries between {} and {}.",
            report.start, report.end
        ));
        return;
    }

    let mut columns = vec![Column::left("Date")];
    if show_weekday {
        columns.push(Column::left("Day"));
    }
    columns.extend([
        Column::left("Type"),
        Column::left("Entries / Justification"),
        Column::right("Worked"),
        Column::right("Balance"),
        Column::right("Running"),
    ]);

    let mut table = Table::new(columns);

    for row in &report.rows {
        let mut cells = vec![Cell::plain(row.date.format("%Y-%m-%d").to_string())];
        if show_weekday {
            cells.push(Cell::plain(date::weekday_short(&row.date)));
        }
        cells.extend([
            Cell::colored(row.day_type.label(), day_type_color(&row.day_type)),
            Cell::plain(row.display_text.clone()),
            Cell::plain(mins2readable(row.worked_minutes, false, false)),
            Cell::colored(
                mins2readable(row.balance_minutes, true, false),
                color_for_balance(row.balance_minutes),
            ),
            Cell::colored(
                mins2readable(row.running_balance_minutes, true, false),
                color_for_balance(row.running_balance_minutes),
            ),
        ]);
        table.add_row(cells);
    }

    print!("{}", table.render());
    println!();
    println!(
        "{} {} | {} {}",
        bold("Total worked:"),
        mins2readable(report.total_worked_minutes, false, false),
        bold("Balance:"),
        mins2readable(report.total_balance_minutes, true, false)
    );
}
