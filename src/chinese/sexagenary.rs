//! 干支
//!
//! 日干支由日偏移推得，年、月干支由农历年月推得，均为纯函数。

use std::fmt;

use super::Month;

/// 正月的月支为寅。
pub const MONTH_BRANCH_BASE: u32 = 2;

/// 一组干支，天干 `0..10` 自甲起，地支 `0..12` 自子起。
///
/// 天干与地支奇偶必同，故只有六十种组合。
///
/// # 用例
///
/// ```
/// use nongli::chinese::Sexagenary;
///
/// let gz = Sexagenary::from_cycle(41);
/// assert_eq!((1, 5), (gz.stem(), gz.branch()));
/// assert_eq!("乙巳", gz.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sexagenary {
    stem: u32,
    branch: u32,
}

impl Sexagenary {
    /// 由六十甲子序号（0 为甲子）取得干支。
    pub fn from_cycle(cycle: u32) -> Self {
        let cycle = cycle % 60;
        Self {
            stem: cycle % 10,
            branch: cycle % 12,
        }
    }

    /// 日干支：`(日偏移 + 纪元日序号) mod 60`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::Sexagenary;
    ///
    /// // 1901-01-01 己卯
    /// assert_eq!("己卯", Sexagenary::for_day(0, 15).to_string());
    /// ```
    pub fn for_day(day_offset: i64, base: u32) -> Self {
        Self::from_cycle((day_offset + base as i64).rem_euclid(60) as u32)
    }

    /// 年干支，以公元 4 年为甲子。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::Sexagenary;
    ///
    /// assert_eq!("甲辰", Sexagenary::for_year(2024).to_string());
    /// assert_eq!("辛酉", Sexagenary::for_year(-2699).to_string());
    /// ```
    pub fn for_year(year: i32) -> Self {
        Self {
            stem: (year - 4).rem_euclid(10) as u32,
            branch: (year - 4).rem_euclid(12) as u32,
        }
    }

    /// 月干支，闰月同其本月。月干由年干起：甲己之年丙作首。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{Month::*, Sexagenary};
    ///
    /// assert_eq!("丙寅", Sexagenary::for_month(2024, Common(1)).to_string());
    /// assert_eq!("丁未", Sexagenary::for_month(2017, Leap(6)).to_string());
    /// ```
    pub fn for_month(year: i32, month: Month) -> Self {
        let m0 = month.num().saturating_sub(1);
        let year_stem = Self::for_year(year).stem;
        let offset = (year_stem % 5 + 1) * 2;
        Self {
            stem: (m0 + offset) % 10,
            branch: (m0 + MONTH_BRANCH_BASE) % 12,
        }
    }

    pub fn stem(&self) -> u32 {
        self.stem
    }
    pub fn branch(&self) -> u32 {
        self.branch
    }
    /// 天干名
    pub fn stem_name(&self) -> &'static str {
        super::fmt::STEMS[self.stem as usize]
    }
    /// 地支名
    pub fn branch_name(&self) -> &'static str {
        super::fmt::BRANCHES[self.branch as usize]
    }
    /// 地支所属生肖
    pub fn shengxiao(&self) -> &'static str {
        super::fmt::SHENGXIAO[self.branch as usize]
    }
}

impl fmt::Display for Sexagenary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem_name(), self.branch_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn cycle_pairs() {
        let pairs: std::collections::HashSet<_> = (0..60).map(Sexagenary::from_cycle).collect();
        assert_eq!(60, pairs.len());
        for gz in &pairs {
            assert_eq!(gz.stem() % 2, gz.branch() % 2);
        }
        assert_eq!("癸亥", Sexagenary::from_cycle(59).to_string());
        assert_eq!("甲子", Sexagenary::from_cycle(60).to_string());
    }

    #[test]
    fn days() {
        let dataset = [
            (0, "己卯"),
            (36159, "戊午"),
            (44965, "甲辰"),
            (31194, "癸酉"),
            (17805, "甲子"),
            (73048, "丁未"),
            (-15, "甲子"),
            (-16, "癸亥"),
        ];
        for (offset, std) in dataset {
            assert_eq!(std, Sexagenary::for_day(offset, 15).to_string(), "{offset}");
        }
    }

    #[test]
    fn day_periodicity() {
        for offset in -200..200 {
            assert_eq!(Sexagenary::for_day(offset, 15), Sexagenary::for_day(offset + 60, 15));
            assert_ne!(Sexagenary::for_day(offset, 15), Sexagenary::for_day(offset + 30, 15));
        }
    }

    #[test]
    fn years() {
        let dataset = [
            (4, "甲子"),
            (1900, "庚子"),
            (1949, "己丑"),
            (1986, "丙寅"),
            (1999, "己卯"),
            (2017, "丁酉"),
            (2100, "庚申"),
            (3, "癸亥"),
        ];
        for (year, std) in dataset {
            assert_eq!(std, Sexagenary::for_year(year).to_string(), "{year}");
        }
        assert_eq!("鼠", Sexagenary::for_year(2020).shengxiao());
        assert_eq!("龙", Sexagenary::for_year(2024).shengxiao());
    }

    #[test]
    fn months() {
        let dataset = [
            ((1999, Common(11)), "丙子"),
            ((1900, Common(11)), "戊子"),
            ((1986, Common(4)), "癸巳"),
            ((2017, Leap(6)), "丁未"),
            ((2017, Common(6)), "丁未"),
            ((2020, Leap(4)), "辛巳"),
            ((2023, Leap(2)), "乙卯"),
            ((2100, Common(12)), "己丑"),
            ((2024, Common(8)), "癸酉"),
        ];
        for ((year, month), std) in dataset {
            assert_eq!(std, Sexagenary::for_month(year, month).to_string(), "{year} {month:?}");
        }
    }
}
