use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::path::PathBuf;

use crate::config::types::PathConfig;

/// The recurring time bucket a periodic note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
}

/// Everything that differs between periods, resolved once per call.
#[derive(Clone, Copy)]
pub struct PeriodSpec {
    pub name: &'static str,
    notes_dir: fn(&PathConfig) -> PathBuf,
    template_path: fn(&PathConfig) -> PathBuf,
    /// Anchor date of the period containing the given day.
    anchor: fn(NaiveDate) -> NaiveDate,
    /// Length of one period step in days.
    step_days: i64,
    /// chrono format for the date key of an anchor date.
    key_format: &'static str,
}

static DAILY: PeriodSpec = PeriodSpec {
    name: "daily",
    notes_dir: PathConfig::daily_notes,
    template_path: PathConfig::daily_template_path,
    anchor: same_day,
    step_days: 1,
    key_format: "%Y-%m-%d",
};

// `%G` is the ISO week-based year, which differs from the calendar year for
// Mondays at the very end of December.
static WEEKLY: PeriodSpec = PeriodSpec {
    name: "weekly",
    notes_dir: PathConfig::weekly_notes,
    template_path: PathConfig::weekly_template_path,
    anchor: monday_of,
    step_days: 7,
    key_format: "%G-W%V",
};

impl Period {
    pub fn spec(self) -> &'static PeriodSpec {
        match self {
            Period::Daily => &DAILY,
            Period::Weekly => &WEEKLY,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl PeriodSpec {
    pub fn notes_dir(&self, paths: &PathConfig) -> PathBuf {
        (self.notes_dir)(paths)
    }

    pub fn template_path(&self, paths: &PathConfig) -> PathBuf {
        (self.template_path)(paths)
    }

    /// Date key of the period `offset` steps away from the one containing `today`.
    pub fn key(&self, today: NaiveDate, offset: i64) -> String {
        let target = (self.anchor)(today) + Duration::days(offset * self.step_days);
        target.format(self.key_format).to_string()
    }
}

fn same_day(day: NaiveDate) -> NaiveDate {
    day
}

/// Monday of the ISO week containing `day`.
pub fn monday_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}
