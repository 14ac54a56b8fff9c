//! Upcoming birthday scheduling.
//!
//! A birthday is congratulated on its next occurrence on or after today.
//! Occurrences on a weekend move to the following Monday. Only dates less
//! than [`UPCOMING_WINDOW_DAYS`] days after today are reported, grouped by
//! that (possibly moved) date.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Size of the reporting window in days, today included.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Names to congratulate on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayDay {
    pub date: NaiveDate,

    /// Contact names in address book order
    pub names: Vec<String>,
}

impl BirthdayDay {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Full English weekday name, e.g. `"Friday"`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }
}

/// Birthdays in the window, one entry per date, earliest first.
///
/// Every entry has at least one name. Since the window is shorter than two
/// weeks, a weekday name identifies a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthdayReport {
    days: Vec<BirthdayDay>,
}

impl BirthdayReport {
    pub fn days(&self) -> &[BirthdayDay] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// `(weekday name, names)` pairs in date order.
    pub fn by_weekday(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.days
            .iter()
            .map(|day| (day.weekday_name(), day.names.as_slice()))
    }

    /// Names congratulated on the given weekday (e.g. `"Monday"`), if any.
    pub fn names_on(&self, weekday: &str) -> Option<&[String]> {
        self.by_weekday()
            .find(|(name, _)| name.eq_ignore_ascii_case(weekday))
            .map(|(_, names)| names)
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .by_weekday()
            .map(|(weekday, names)| format!("{}: {}", weekday, names.join(", ")))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

/// The date on which `birthday` is congratulated, counting from `today`.
///
/// This year's occurrence is used unless it already passed, in which case
/// next year's is. Saturday and Sunday move to the next Monday.
pub fn congratulation_date(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let mut occurrence = birthday.occurrence_in(today.year());
    if occurrence < today {
        occurrence = birthday.occurrence_in(today.year() + 1);
    }

    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Collect the birthdays among `records` that fall in the window starting at `today`.
pub fn upcoming<'a, I>(records: I, today: NaiveDate) -> BirthdayReport
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let date = congratulation_date(birthday, today);
        let delta = (date - today).num_days();
        if delta < UPCOMING_WINDOW_DAYS {
            by_date
                .entry(date)
                .or_default()
                .push(record.name().to_string());
        }
    }

    tracing::debug!(%today, days = by_date.len(), "Upcoming birthdays computed");

    BirthdayReport {
        days: by_date
            .into_iter()
            .map(|(date, names)| BirthdayDay { date, names })
            .collect(),
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
