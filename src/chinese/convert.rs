//! 公历与农历互换
//!
//! 公历转农历：取不晚于该日的最近锚点，累计公历日差，再逐月扣减农历月长。
//! 农历转公历：累计自纪元起的农历月长得日偏移，加到纪元公历日上。

use std::iter;

use tracing::trace;

use super::Month::{self, *};
use super::provider::{Provider, Tables};
use super::sexagenary::Sexagenary;
use super::term::{self, TermKind};
use super::{Lunar, SolarTerm};
use crate::date::{Date, YearType};
use crate::error::Error;

/// 换算器，持有历表的共享引用。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Converter, Month::*};
///
/// let conv = Converter::builtin();
/// let lunar = conv.from_solar(2000, 1, 1).unwrap();
/// assert_eq!((1999, Common(11), 25), (lunar.year(), lunar.month(), lunar.day()));
/// ```
#[derive(Debug)]
pub struct Converter<'a, P: Provider + ?Sized = Tables> {
    provider: &'a P,
}

impl<P: Provider + ?Sized> Clone for Converter<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P: Provider + ?Sized> Copy for Converter<'_, P> {}

impl Converter<'static, Tables> {
    /// 使用内置历表。
    pub fn builtin() -> Self {
        Self::new(Tables::builtin())
    }
}

impl<'a, P: Provider + ?Sized> Converter<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &'a P {
        self.provider
    }

    /// 由公历年月日取得农历日期。
    pub fn from_solar(&self, year: i32, month: i32, day: i32) -> Result<Lunar, Error> {
        self.from_date(Date::new(year, month, day)?)
    }

    /// 由日期取得农历日期。
    pub fn from_date(&self, date: Date) -> Result<Lunar, Error> {
        let (year, month, day) = self.solar_to_lunar(date)?;
        let offset = self.day_offset(year, month, day)?;
        Ok(self.build(year, month, day, offset, date))
    }

    /// 由农历年、带符号月（负数为闰月）、日取得农历日期。
    pub fn from_lunar(&self, year: i32, month: i32, day: i32) -> Result<Lunar, Error> {
        let month = Month::from_signed(month)?;
        let offset = self.day_offset_checked(year, month, day)?;
        let date = self.provider.epoch().solar + offset as i32;
        Ok(self.build(year, month, day as u32, offset, date))
    }

    /// 公历转农历，返回 `(年, 月, 日)`。
    pub fn solar_to_lunar(&self, date: Date) -> Result<(i32, Month, u32), Error> {
        let epoch = self.provider.epoch();
        let offset = date - epoch.solar;
        if offset < 0 || offset > self.last_offset()? {
            return Err(Error::OutOfRange { year: date.gregorian().0 });
        }
        let anchor = self
            .provider
            .anchors()
            .iter()
            .rev()
            .find(|a| a.solar <= date)
            .unwrap_or(epoch);

        let ay = anchor.solar.gregorian().0;
        let y = date.gregorian().0;
        let mut diff: i64 = (ay..y).map(|i| YearType::from_gregorian(i).days() as i64).sum();
        diff += (date.ordinal() - anchor.solar.ordinal()) as i64;
        debug_assert_eq!(diff, date - anchor.solar);

        let (mut year, mut month) = (anchor.year, anchor.month);
        let mut day = anchor.day as i64 + diff;
        let mut len = self.month_len(year, month)?;
        let mut steps = 0;
        while day > len {
            day -= len;
            (year, month) = next_month(self.provider, year, month);
            len = self.month_len(year, month)?;
            steps += 1;
        }
        trace!(anchor = %anchor.solar, diff, steps, "solar date normalized");
        Ok((year, month, day as u32))
    }

    /// 农历转公历。
    pub fn lunar_to_solar(&self, year: i32, month: Month, day: u32) -> Result<Date, Error> {
        let day = i32::try_from(day).unwrap_or(i32::MAX);
        let offset = self.day_offset_checked(year, month, day)?;
        Ok(self.provider.epoch().solar + offset as i32)
    }

    /// 自纪元起的日数，纪元当日为 0，纪元之前为负。
    pub fn day_offset(&self, year: i32, month: Month, day: u32) -> Result<i64, Error> {
        let day = i32::try_from(day).unwrap_or(i32::MAX);
        Ok(elapsed_days(self.provider, year, month, day)? - self.epoch_elapsed()?)
    }

    /// 取得公历日期当日所交的节或气。
    pub fn term(&self, date: Date, kind: TermKind) -> Option<SolarTerm> {
        term::locate(self.provider, date, kind)
    }

    fn day_offset_checked(&self, year: i32, month: Month, day: i32) -> Result<i64, Error> {
        let offset = elapsed_days(self.provider, year, month, day)? - self.epoch_elapsed()?;
        if offset < 0 || offset > self.last_offset()? {
            return Err(Error::OutOfRange { year });
        }
        Ok(offset)
    }

    /// 历表末日的日偏移。
    fn last_offset(&self) -> Result<i64, Error> {
        let end = *self.provider.years().end();
        let total = self
            .provider
            .days_before_year(end + 1)
            .ok_or(Error::OutOfRange { year: end })?;
        Ok(total - 1 - self.epoch_elapsed()?)
    }

    fn epoch_elapsed(&self) -> Result<i64, Error> {
        let epoch = self.provider.epoch();
        elapsed_days(self.provider, epoch.year, epoch.month, epoch.day as i32)
    }

    fn month_len(&self, year: i32, month: Month) -> Result<i64, Error> {
        self.provider
            .days_in_month(year, month)
            .map(i64::from)
            .ok_or(Error::OutOfRange { year })
    }

    fn build(&self, year: i32, month: Month, day: u32, day_offset: i64, solar: Date) -> Lunar {
        Lunar {
            year,
            month,
            day,
            solar,
            day_offset,
            day_sexagenary: Sexagenary::for_day(day_offset, self.provider.day_cycle_base()),
            jie: self.term(solar, TermKind::Jie),
            qi: self.term(solar, TermKind::Qi),
        }
    }
}

/// 该年各月，按先后排列，闰月紧随同序号平月之后。
pub fn months_of<P: Provider + ?Sized>(provider: &P, year: i32) -> impl Iterator<Item = Month> + use<P> {
    let leap = provider.leap_month(year);
    (1..=12).flat_map(move |n| iter::once(Common(n)).chain((leap == Some(n)).then_some(Leap(n))))
}

/// 次月：平月之后若有同序号闰月则为闰月，十二月（或闰十二月）之后为次年正月。
pub fn next_month<P: Provider + ?Sized>(provider: &P, year: i32, month: Month) -> (i32, Month) {
    match month {
        Common(n) if provider.leap_month(year) == Some(n) => (year, Leap(n)),
        Common(12) | Leap(12) => (year + 1, Common(1)),
        Common(n) | Leap(n) => (year, Common(n + 1)),
    }
}

/// 校验农历日期，并返回自历表首年正月初一起的日数。
pub(crate) fn elapsed_days<P: Provider + ?Sized>(
    provider: &P,
    year: i32,
    month: Month,
    day: i32,
) -> Result<i64, Error> {
    if !(1..=12).contains(&month.num()) {
        return Err(Error::InvalidMonth {
            month: month.to_signed(),
        });
    }
    if !provider.years().contains(&year) {
        return Err(Error::OutOfRange { year });
    }
    if let Leap(n) = month {
        if provider.leap_month(year) != Some(n) {
            return Err(Error::MissingLeapMonth { year, month: n });
        }
    }
    let max = provider
        .days_in_month(year, month)
        .ok_or(Error::OutOfRange { year })?;
    if day < 1 || day as u32 > max {
        return Err(Error::InvalidDay { day, max });
    }
    let before = provider
        .days_before_year(year)
        .ok_or(Error::OutOfRange { year })?;
    let mut within = 0;
    for m in months_of(provider, year).take_while(|&m| m != month) {
        within += provider
            .days_in_month(year, m)
            .ok_or(Error::OutOfRange { year })? as i64;
    }
    Ok(before + within + day as i64 - 1)
}
