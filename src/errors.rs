//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation (command layer)
    // ---------------------------
    #[error("Could not parse '{0}' as a valid date format.")]
    InvalidDate(String),

    #[error("Could not parse '{0}' as a valid month (use YYYY-MM or MM/YYYY).")]
    InvalidMonth(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("Invalid day type: {0}")]
    InvalidDayType(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Could not parse '{0}' as a valid time format.")]
    MalformedTimeInput(String),

    #[error("Entry times must be positive: '{0}'.")]
    InvalidTimeValue(String),

    #[error("Cannot override a not yet created day '{0}'.")]
    DayNotFound(NaiveDate),

    #[error(
        "Malformed ledger: unpaired time entries on {}. Fix them with `entry override` before reporting.",
        join_dates(.0)
    )]
    MalformedLedger(Vec<NaiveDate>),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type AppResult<T> = Result<T, AppError>;
