use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Work,
    Weekend,
    Sick,
    Holiday,
    Vacation,
}

impl DayType {
    pub const ALL: [DayType; 5] = [
        DayType::Work,
        DayType::Weekend,
        DayType::Sick,
        DayType::Holiday,
        DayType::Vacation,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayType::Work => "work",
            DayType::Weekend => "weekend",
            DayType::Sick => "sick",
            DayType::Holiday => "holiday",
            DayType::Vacation => "vacation",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(DayType::Work),
            "weekend" => Some(DayType::Weekend),
            "sick" => Some(DayType::Sick),
            "holiday" => Some(DayType::Holiday),
            "vacation" => Some(DayType::Vacation),
            _ => None,
        }
    }

    /// Helper: accept user/config input in any case
    pub fn from_code(code: &str) -> Option<Self> {
        DayType::from_db_str(&code.trim().to_lowercase())
    }

    pub fn is_work(&self) -> bool {
        matches!(self, DayType::Work)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::Work => "Work",
            DayType::Weekend => "Weekend",
            DayType::Sick => "Sick",
            DayType::Holiday => "Holiday",
            DayType::Vacation => "Vacation",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
