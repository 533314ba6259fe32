pub mod day_record;
pub mod day_type;
pub mod report;
pub mod time_event;
