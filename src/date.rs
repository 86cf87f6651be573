//! Calendar-independant date and Gregorian day arithmetic.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::Error;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a validated Gregorian calendar date.
    ///
    /// Unlike [`Date::from_gregorian`], month and day are checked against
    /// the Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::{Date, Error};
    ///
    /// assert!(Date::new(2024, 2, 29).is_ok());
    /// assert_eq!(Err(Error::InvalidDay { day: 29, max: 28 }), Date::new(2023, 2, 29));
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        let max = days_in_month(year, month as u32);
        if day < 1 || day as u32 > max {
            return Err(Error::InvalidDay { day, max });
        }
        Self::from_gregorian(year, month, day).ok_or(Error::OutOfRange { year })
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(-4714, 1, 1));
    /// assert_eq!(None, Date::from_gregorian(i32::MAX, 1, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }

    /// Returns the day number within its Gregorian year, `1..=366`.
    pub fn ordinal(&self) -> i32 {
        let (y, m, d) = self.gregorian();
        ordinal_day_number(m, d, YearType::from_gregorian(y))
    }

    /// Adds a signed number of days, returning `None` if the result falls
    /// outside the supported range.
    pub fn checked_add_days(self, days: i32) -> Option<Self> {
        self.jdn.checked_add_signed(days).map(Self::from_jdn)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// # Panics
///
/// Panics if the result falls outside the supported range; see
/// [`Date::checked_add_days`].
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        match self.checked_add_days(rhs) {
            Some(date) => date,
            None => panic!("{self} + {rhs} days is out of range"),
        }
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i64 - rhs.jdn as i64
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in a year of this type.
    pub fn days(&self) -> i32 {
        365 + self.is_leap() as i32
    }
}

/// Returns the number of days of a Gregorian month, or 0 if `month` is not
/// in `1..=12`.
///
/// # Example
///
/// ```
/// use nongli::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2000, 2));
/// assert_eq!(28, days_in_month(1900, 2));
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}

pub(crate) fn ordinal_day_number(month: i32, day: i32, year_type: YearType) -> i32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as i32,
    }
}


#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_ordinal_day_number() {
        use YearType::*;
        assert_eq!(1, ordinal_day_number(1, 1, Common));
        assert_eq!(256, ordinal_day_number(9, 13, Common));
        assert_eq!(366, ordinal_day_number(12, 31, Leap));
    }

    #[test]
    fn month_lengths() {
        let total: u32 = (1..=12).map(|m| days_in_month(2000, m)).sum();
        assert_eq!(366, total);
        let total: u32 = (1..=12).map(|m| days_in_month(1900, m)).sum();
        assert_eq!(365, total);
        assert_eq!(0, days_in_month(2000, 13));
    }
}
