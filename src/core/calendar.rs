//! Calendar arithmetic over a single minute counter
//!
//! `Time` stores nothing but elapsed minutes. Every calendar field is derived
//! on demand, and each "in-unit" remainder is taken against the floor of the
//! next coarser derived quantity rather than a modulo of the raw minutes.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 4.0;

/// Month names indexed by `Month` ordinal
pub const MONTH_NAMES: [&str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

/// The four months of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Month {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Month {
    pub fn all() -> [Month; 4] {
        [Month::Spring, Month::Summer, Month::Autumn, Month::Winter]
    }

    /// Month for a (possibly fractional) index, clamped into 0..=3
    pub fn from_index(index: f64) -> Self {
        // NaN casts to 0
        let i = (index.floor() as i64).clamp(0, 3) as usize;
        Month::all()[i]
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[*self as usize]
    }
}

/// A point in simulation time, measured in minutes since the epoch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Time {
    pub minutes: f64,
}

impl Time {
    pub fn from_minutes(minutes: f64) -> Self {
        Self { minutes }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn hours(&self) -> f64 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub fn days(&self) -> f64 {
        self.hours() / HOURS_PER_DAY
    }

    pub fn months(&self) -> f64 {
        self.days() / DAYS_PER_MONTH
    }

    /// Years as the calendar has always counted them: days over the
    /// months-per-year constant.
    pub fn years(&self) -> f64 {
        self.days() / MONTHS_PER_YEAR
    }

    pub fn minute_in_hour(&self) -> f64 {
        self.minutes - self.hours().floor() * MINUTES_PER_HOUR
    }

    pub fn hour_in_day(&self) -> f64 {
        self.hours() - self.days().floor() * HOURS_PER_DAY
    }

    pub fn day_in_month(&self) -> f64 {
        self.days() - self.months().floor() * DAYS_PER_MONTH
    }

    pub fn month_in_year(&self) -> f64 {
        self.months() - self.years().floor() * MONTHS_PER_YEAR
    }

    pub fn month(&self) -> Month {
        Month::from_index(self.month_in_year())
    }

    pub fn month_name(&self) -> &'static str {
        self.month().name()
    }

    /// A new time `minutes` later than this one
    pub fn advance(&self, minutes: f64) -> Self {
        Self::from_minutes(self.minutes + minutes)
    }

    /// Span between `earlier` and this time
    pub fn elapsed_since(&self, earlier: Time) -> Self {
        Self::from_minutes(self.minutes - earlier.minutes)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, day {}, {:02}:{:02}",
            self.month_name(),
            self.day_in_month().floor() as i64 + 1,
            self.hour_in_day().floor() as i64,
            self.minute_in_hour().floor() as i64,
        )
    }
}
