//! Conversion between the Gregorian calendar and the Chinese lunisolar
//! calendar.
//!
//! Dates are converted with pre-built tables of lunisolar month lengths and
//! solar-term days covering lunisolar years 1900 through 2100 (Gregorian
//! 1901-01-01 through 2101-01-28). From a converted date the crate derives
//! the sexagenary (干支) cycle of year, month and day, the solar term (节气)
//! falling on that day, and the usual almanac annotations.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::chinese::{Lunar, Month::*};
//!
//! let lunar = Lunar::from_solar(2000, 1, 1).unwrap();
//! assert_eq!((1999, Common(11), 25), (lunar.year(), lunar.month(), lunar.day()));
//! assert_eq!("戊午", lunar.day_sexagenary().to_string());
//!
//! // Negative months are intercalary.
//! let leap = Lunar::from_lunar(2020, -4, 1).unwrap();
//! assert_eq!("2020-05-23", leap.solar().iso_gregorian());
//! ```
//!
//! Tables other than the built-in ones can be loaded from TOML, see
//! [`chinese::Tables::from_toml`] and [`chinese::Converter`].

pub mod chinese;
pub mod date;
mod error;

pub use date::{Date, YearType};
pub use error::{Error, ErrorKind};
