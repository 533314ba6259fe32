//! Balance arithmetic and the per-day-type baseline policy.

use crate::errors::AppResult;
use crate::models::day_type::DayType;
use crate::utils::time::parse_duration_to_minutes;
use std::collections::BTreeMap;

/// What a day of a given type is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// The configured workday target.
    Target,
    /// A fixed number of minutes, independent of the target.
    Fixed(i64),
}

impl Baseline {
    /// `"target"` or any duration accepted by [`parse_duration_to_minutes`].
    pub fn parse(s: &str) -> AppResult<Self> {
        if s.trim().eq_ignore_ascii_case("target") {
            Ok(Baseline::Target)
        } else {
            parse_duration_to_minutes(s).map(Baseline::Fixed)
        }
    }
}

/// Expected minutes per day type, passed explicitly to the report builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselinePolicy {
    work_day_minutes: i64,
    per_type: BTreeMap<DayType, Baseline>,
}

impl BaselinePolicy {
    /// Work days expect the target, every other type expects nothing.
    pub fn new(work_day_minutes: i64) -> Self {
        let per_type = DayType::ALL
            .iter()
            .map(|t| {
                let b = if t.is_work() {
                    Baseline::Target
                } else {
                    Baseline::Fixed(0)
                };
                (*t, b)
            })
            .collect();

        Self {
            work_day_minutes,
            per_type,
        }
    }

    pub fn with_baseline(mut self, day_type: DayType, baseline: Baseline) -> Self {
        self.per_type.insert(day_type, baseline);
        self
    }

    pub fn baseline_for(&self, day_type: DayType) -> i64 {
        match self.per_type.get(&day_type) {
            Some(Baseline::Fixed(m)) => *m,
            Some(Baseline::Target) | None => self.work_day_minutes,
        }
    }
}

pub fn calculate_balance(worked_minutes: i64, baseline_minutes: i64) -> i64 {
    worked_minutes - baseline_minutes
}
