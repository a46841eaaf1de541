//! Core types and constants for the solar system visualization.

use bevy::prelude::*;

/// System set ordering one frame of the visualization.
///
/// Body positions must be computed for the *current* date before the clock
/// steps forward, so a frame always renders the date it was entered with.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Quit and camera input processing (runs first)
    Input,
    /// Body position updates and trail drawing
    Simulate,
    /// Clock advancement (runs last)
    Advance,
}

/// Uniform factor applied to raw ephemeris coordinates (AU) to get scene units.
pub const SCENE_SCALE: f64 = 4.0;

/// Civil days between 1970-01-01 and the J2000 epoch date (2000-01-01).
const J2000_CIVIL_DAYS: i64 = 10957;

/// A calendar date with day precision (proleptic Gregorian).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SimDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Days since 1970-01-01 (negative for earlier dates).
    pub fn to_civil_days(self) -> i64 {
        ymd_to_days(self.year, self.month, self.day)
    }

    /// Date from days since 1970-01-01.
    pub fn from_civil_days(days: i64) -> Self {
        let (year, month, day) = days_to_ymd(days);
        Self { year, month, day }
    }

    /// The following calendar day.
    pub fn next(self) -> Self {
        Self::from_civil_days(self.to_civil_days() + 1)
    }

    /// Days since the J2000 epoch (2000-01-01 12:00).
    ///
    /// Dates are day-precision and taken at 00:00, half a day before the
    /// noon-based astronomical epoch, hence the -0.5.
    pub fn days_since_j2000(self) -> f64 {
        (self.to_civil_days() - J2000_CIVIL_DAYS) as f64 - 0.5
    }
}

impl std::fmt::Display for SimDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Simulated date, advanced by exactly one day per rendered frame.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    current: SimDate,
}

/// Fixed starting date of the simulation.
pub const EPOCH: SimDate = SimDate::new(1980, 1, 1);

impl Default for SimulationClock {
    fn default() -> Self {
        Self { current: EPOCH }
    }
}

impl SimulationClock {
    /// Clock starting at an arbitrary date (tests).
    pub fn starting_at(date: SimDate) -> Self {
        Self { current: date }
    }

    /// Current simulated date.
    pub fn value(&self) -> SimDate {
        self.current
    }

    /// Step forward one calendar day. Monotonic; there is no rollback.
    pub fn advance(&mut self) {
        self.current = self.current.next();
    }
}

/// Convert year/month/day to days since 1970-01-01.
///
/// Inverse of `days_to_ymd`, same era-based Gregorian algorithm.
fn ymd_to_days(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let m = month as i64;
    let d = day as i64;

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let year_of_era = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let day_of_year = (153 * mp + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146097 + day_of_era - 719468
}

/// Convert days since 1970-01-01 to year, month, day.
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}
