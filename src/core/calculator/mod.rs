pub mod balance;
pub mod worked;
