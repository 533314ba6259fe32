pub mod config;
pub mod db;
pub mod entry;
pub mod init;
pub mod log;
pub mod report;
