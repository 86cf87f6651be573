//! Chinese calendar
//!
//! Note: 为方便处理诸多术语，本模块文档用中文。
//!
//! 本程序以预制的历表（月长、闰月、交节日）推算农历，见 [`provider`]。公历与农历的互换见
//! [`convert`]，干支见 [`sexagenary`]，节气见 [`term`]，宿、神位、节日等注释见 [`annotation`]。

use std::fmt as std_fmt;

use crate::date::Date;
use crate::error::Error;

pub mod annotation;
pub mod convert;
pub mod fmt;
pub mod provider;
pub mod sexagenary;
pub mod term;

pub use annotation::{Deity, Lodge, Palace};
pub use convert::Converter;
pub use provider::{Anchor, Provider, TableConfig, TableError, Tables, TermTable};
pub use sexagenary::Sexagenary;
pub use term::{SolarTerm, TermKind};

/// 月名，`Common` 为平月，`Leap` 为闰月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 由带符号月序号取得月名，负数为闰月。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Error;
    /// use nongli::chinese::Month::{self, *};
    ///
    /// assert_eq!(Ok(Leap(6)), Month::from_signed(-6));
    /// assert_eq!(Err(Error::InvalidMonth { month: 0 }), Month::from_signed(0));
    /// ```
    pub fn from_signed(month: i32) -> Result<Self, Error> {
        match month {
            1..=12 => Ok(Month::Common(month as u32)),
            -12..=-1 => Ok(Month::Leap(month.unsigned_abs())),
            _ => Err(Error::InvalidMonth { month }),
        }
    }
    /// 带符号月序号，闰月为负。
    pub fn to_signed(self) -> i32 {
        match self {
            Month::Common(v) => v as i32,
            Month::Leap(v) => -(v as i32),
        }
    }
    /// 取得月序号，无论平闰。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 闰月为 `true`，平月为 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月称「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 农历日期，连同其对应的公历日期、日偏移与日干支。
///
/// 由 [`Lunar::from_solar`]、[`Lunar::from_lunar`] 等使用内置历表构造；
/// 如需其他历表，见 [`Converter`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Lunar, Month::*};
///
/// let lunar = Lunar::from_solar(2024, 2, 10).unwrap();
/// assert_eq!((2024, Common(1), 1), (lunar.year(), lunar.month(), lunar.day()));
/// assert_eq!("二〇二四年正月初一", lunar.to_string());
/// assert_eq!("甲辰", lunar.year_sexagenary().to_string());
/// assert_eq!(["春节"], lunar.festivals());
///
/// let leap = Lunar::from_lunar(2017, -6, 1).unwrap();
/// assert_eq!("2017-07-23", leap.solar().iso_gregorian());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Lunar {
    pub(crate) year: i32,
    pub(crate) month: Month,
    pub(crate) day: u32,
    pub(crate) solar: Date,
    pub(crate) day_offset: i64,
    pub(crate) day_sexagenary: Sexagenary,
    pub(crate) jie: Option<SolarTerm>,
    pub(crate) qi: Option<SolarTerm>,
}

impl Lunar {
    /// 由公历年月日构造。
    pub fn from_solar(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        Converter::builtin().from_solar(year, month, day)
    }
    /// 由农历年、带符号月（负数为闰月）、日构造。
    pub fn from_lunar(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        Converter::builtin().from_lunar(year, month, day)
    }
    /// 由日期构造。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        Converter::builtin().from_date(date)
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> Month {
        self.month
    }
    /// 带符号月序号，闰月为负。
    pub fn signed_month(&self) -> i32 {
        self.month.to_signed()
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 对应的公历日期
    pub fn solar(&self) -> Date {
        self.solar
    }
    /// 自纪元起的日数
    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }
    /// 星期，ISO 编号 `1..=7`。
    pub fn day_of_week(&self) -> i32 {
        self.solar.day_of_week()
    }
    /// 星期名（一至日）
    pub fn week(&self) -> &'static str {
        fmt::week(self.day_of_week())
    }

    pub fn year_sexagenary(&self) -> Sexagenary {
        Sexagenary::for_year(self.year)
    }
    pub fn month_sexagenary(&self) -> Sexagenary {
        Sexagenary::for_month(self.year, self.month)
    }
    pub fn day_sexagenary(&self) -> Sexagenary {
        self.day_sexagenary
    }
    /// 年生肖
    pub fn shengxiao(&self) -> &'static str {
        self.year_sexagenary().shengxiao()
    }
    /// 季节名，如「孟春」。
    pub fn season(&self) -> &'static str {
        annotation::season(self.month.num()).unwrap_or_default()
    }

    /// 当日所交之节
    pub fn jie(&self) -> Option<SolarTerm> {
        self.jie
    }
    /// 当日所交之气
    pub fn qi(&self) -> Option<SolarTerm> {
        self.qi
    }

    /// 固定节日。闰月无节日。
    pub fn festivals(&self) -> &'static [&'static str] {
        if self.month.is_leap() {
            return &[];
        }
        annotation::festivals(self.month.num(), self.day)
    }
    /// 民俗节日。闰月无节日。
    pub fn other_festivals(&self) -> &'static [&'static str] {
        if self.month.is_leap() {
            return &[];
        }
        annotation::other_festivals(self.month.num(), self.day)
    }

    /// 当日值宿
    pub fn lodge(&self) -> Lodge {
        Lodge::of(self)
    }
    /// 彭祖百忌，按日干、日支。
    pub fn pengzu(&self) -> (&'static str, &'static str) {
        let day = self.day_sexagenary;
        (
            annotation::pengzu_stem(day.stem()),
            annotation::pengzu_branch(day.branch()),
        )
    }
    /// 神位所在卦位
    pub fn position(&self, deity: Deity) -> &'static str {
        deity.position(self.day_sexagenary.stem())
    }
    /// 神位方向，如「东南」。
    pub fn position_desc(&self, deity: Deity) -> &'static str {
        annotation::position_desc(self.position(deity)).unwrap_or_default()
    }

    /// 所冲之支
    pub fn chong(&self) -> &'static str {
        fmt::BRANCHES[annotation::chong(self.day_sexagenary.branch()) as usize]
    }
    /// 无情之克
    pub fn chong_stem(&self) -> &'static str {
        fmt::STEMS[annotation::chong_stem(self.day_sexagenary.stem()) as usize]
    }
    /// 有情之克
    pub fn chong_stem_tie(&self) -> &'static str {
        annotation::chong_stem_tie(self.day_sexagenary.stem())
            .map(|s| fmt::STEMS[s as usize])
            .unwrap_or_default()
    }
    /// 所冲生肖
    pub fn chong_shengxiao(&self) -> &'static str {
        fmt::SHENGXIAO[annotation::chong(self.day_sexagenary.branch()) as usize]
    }
    /// 冲，形如 `(丁卯)兔`。
    pub fn chong_desc(&self) -> String {
        format!("({}{}){}", self.chong_stem(), self.chong(), self.chong_shengxiao())
    }
    /// 煞方
    pub fn sha(&self) -> &'static str {
        annotation::sha(self.day_sexagenary.branch())
    }

    /// 完整描述，依次为：日期、干支、节日、节气、宫兽、宿、彭祖百忌、五神方位、冲、煞。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::Lunar;
    ///
    /// let lunar = Lunar::from_solar(1986, 5, 29).unwrap();
    /// assert!(lunar.full_string().starts_with("一九八六年四月廿一 丙寅(虎)年癸巳月癸酉日 北方玄武 虚日鼠"));
    /// ```
    pub fn full_string(&self) -> String {
        fmt::full(self)
    }
}

impl std_fmt::Display for Lunar {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{}年{}{}",
            fmt::year(self.year),
            fmt::month(self.month),
            fmt::day(self.day)
        )
    }
}
