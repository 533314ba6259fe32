pub mod calculator;
pub mod config;
pub mod entry;
pub mod integrity;
pub mod log;
pub mod override_day;
pub mod report;
