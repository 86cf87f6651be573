//! 历表数据：农历月长、闰月、纪元锚点与节气表
//!
//! 换算核心只通过 [`Provider`] 读取历表。内置历表 [`Tables::builtin`] 取自随库附带的
//! `data/tables.toml`，覆盖农历 1900 至 2100 年；亦可由 [`Tables::from_toml`] 载入其他历表。

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::{debug, instrument};

use super::Month;
use super::convert;
use super::term::TermKind;
use crate::date::Date;
use crate::error::Error;

/// 历表提供者。
///
/// 实现者须保证数据在构造后不再改变；换算、干支、节气各模块只读访问。
pub trait Provider {
    /// 历表所覆盖的农历年。
    fn years(&self) -> RangeInclusive<i32>;

    /// 该年闰月的月序号，无闰月或年份不在历表内则为 `None`。
    fn leap_month(&self, year: i32) -> Option<u32>;

    /// 该月日数。月份不存在（含无此闰月）或年份不在历表内则为 `None`。
    fn days_in_month(&self, year: i32, month: Month) -> Option<u32>;

    /// 自历表首年正月初一至 `year` 年正月初一的日数，`year` 可取末年的次年。
    fn days_before_year(&self, year: i32) -> Option<i64> {
        let years = self.years();
        if year < *years.start() || year > *years.end() + 1 {
            return None;
        }
        (*years.start()..year)
            .map(|y| {
                convert::months_of(self, y)
                    .map(|m| self.days_in_month(y, m).map(i64::from))
                    .sum::<Option<i64>>()
            })
            .sum()
    }

    /// 纪元锚点，按公历日期升序排列，首项为日偏移的零点。
    fn anchors(&self) -> &[Anchor];

    /// 纪元（日偏移为 0 之日）。
    fn epoch(&self) -> &Anchor {
        &self.anchors()[0]
    }

    /// 纪元当日在六十甲子中的序号（0 为甲子）。
    fn day_cycle_base(&self) -> u32;

    /// 节气表的起算公历年，该年 `ry` 为 1。
    fn term_base_year(&self) -> i32;

    /// 节或气的交节日表。
    fn term_table(&self, kind: TermKind) -> &TermTable;
}

/// 纪元锚点：一对确知相同的公历日与农历日。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Anchor {
    /// 公历日期
    pub solar: Date,
    /// 农历年
    pub year: i32,
    /// 农历月
    pub month: Month,
    /// 农历日
    pub day: u32,
}

/// 一组（节或气）交节日表，每公历月一行。
///
/// 第 `i` 段适用于 `ry < cutovers[i]` 且不属前段的年份，当段交节日为
/// `days[4 * i + ry % 4]`；`overrides` 中的 `(ry, 月) -> 日` 优先。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTable {
    cutovers: Vec<Vec<i32>>,
    days: Vec<Vec<u32>>,
    overrides: BTreeMap<(i32, u32), u32>,
}

impl TermTable {
    /// 该月各段的截止 `ry`（不含），严格递增。
    pub fn cutovers(&self, month: u32) -> &[i32] {
        row(&self.cutovers, month)
    }
    /// 该月各段按 `ry % 4` 排列的交节日。
    pub fn days(&self, month: u32) -> &[u32] {
        row(&self.days, month)
    }
    /// 查修正表。
    pub fn override_day(&self, ry: i32, month: u32) -> Option<u32> {
        self.overrides.get(&(ry, month)).copied()
    }

    #[instrument(skip(config))]
    fn from_config(table: &'static str, config: TermTableConfig) -> Result<Self, TableError> {
        for (rows, what) in [(config.cutovers.len(), "cutovers"), (config.days.len(), "days")] {
            if rows != 12 {
                return Err(TableError::RowCount { table, what, rows });
            }
        }
        for (i, (cut, days)) in config.cutovers.iter().zip(&config.days).enumerate() {
            let month = i as u32 + 1;
            let malformed = |reason| TableError::MalformedRow { table, month, reason };
            if cut.is_empty() {
                return Err(malformed("no cutover years"));
            }
            if cut.windows(2).any(|w| w[0] >= w[1]) {
                return Err(malformed("cutover years must be strictly increasing"));
            }
            if days.len() != 4 * cut.len() {
                return Err(malformed("expected four days per cutover"));
            }
            if days.iter().any(|d| !(1..=31).contains(d)) {
                return Err(malformed("day outside 1..=31"));
            }
        }
        let mut overrides = BTreeMap::new();
        for entry in config.overrides {
            let [ry, month, day] = entry;
            if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                return Err(TableError::InvalidOverride { table, entry });
            }
            overrides.insert((ry, month as u32), day as u32);
        }
        Ok(Self {
            cutovers: config.cutovers,
            days: config.days,
            overrides,
        })
    }
}

fn row<T>(rows: &[Vec<T>], month: u32) -> &[T] {
    month
        .checked_sub(1)
        .and_then(|i| rows.get(i as usize))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// 历表配置，即 `data/tables.toml` 的结构。
///
/// `month_info` 每年一项：低 4 位为闰月（0 为无闰月），第 `16 - m` 位置位表示
/// 平月 `m` 为大月（30 日），第 16 位置位表示闰月为大月。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// `month_info` 首项对应的农历年
    pub first_year: i32,
    /// 逐年月长与闰月编码
    pub month_info: Vec<u32>,
    /// 纪元当日的六十甲子序号
    pub day_cycle_base: u32,
    /// 节气表起算年
    pub term_base_year: i32,
    /// 纪元锚点，首项为纪元
    pub anchors: Vec<AnchorConfig>,
    /// 十二节
    pub jie: TermTableConfig,
    /// 十二气
    pub qi: TermTableConfig,
}

/// 锚点配置，农历月以负数表示闰月。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorConfig {
    /// `[年, 月, 日]`
    pub solar: [i32; 3],
    /// `[年, 月, 日]`
    pub lunar: [i32; 3],
}

/// 交节日表配置。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermTableConfig {
    /// 每月一行截止 `ry`
    pub cutovers: Vec<Vec<i32>>,
    /// 每月一行交节日
    pub days: Vec<Vec<u32>>,
    /// `[ry, 月, 日]`
    #[serde(default)]
    pub overrides: Vec<[i32; 3]>,
}

/// 历表配置有误。
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to parse tables: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("month_info is empty")]
    Empty,
    #[error("invalid leap month {leap} for lunisolar year {year}")]
    InvalidLeapMonth { year: i32, leap: u32 },
    #[error("{table} table: expected 12 rows of {what}, found {rows}")]
    RowCount {
        table: &'static str,
        what: &'static str,
        rows: usize,
    },
    #[error("{table} table, month {month}: {reason}")]
    MalformedRow {
        table: &'static str,
        month: u32,
        reason: &'static str,
    },
    #[error("{table} table: invalid override {entry:?}")]
    InvalidOverride { table: &'static str, entry: [i32; 3] },
    #[error("at least one anchor is required")]
    NoAnchors,
    #[error("anchor {index}: {source}")]
    InvalidAnchor {
        index: usize,
        #[source]
        source: Error,
    },
    #[error("anchors must be in ascending order")]
    UnorderedAnchors,
    #[error("anchor {index} disagrees with the month table by {days} days")]
    InconsistentAnchor { index: usize, days: i64 },
}

/// 校验过的历表，构造后不可变，可在线程间共享。
#[derive(Debug, Clone)]
pub struct Tables {
    first_year: i32,
    month_info: Vec<u32>,
    /// `year_starts[i]` 为首年正月初一至第 `i` 年正月初一的日数，多一项作为末年终点
    year_starts: Vec<i64>,
    anchors: Vec<Anchor>,
    day_cycle_base: u32,
    term_base_year: i32,
    jie: TermTable,
    qi: TermTable,
}

static RAW_TABLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/tables.toml"));

static BUILTIN: LazyLock<Tables> = LazyLock::new(|| {
    Tables::from_toml(RAW_TABLES).unwrap_or_else(|e| panic!("error parsing built-in tables: {e}"))
});

impl Tables {
    /// 内置历表：农历 1900 至 2100 年，纪元 1901-01-01（农历 1900 年十一月十一）。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{Provider, Tables};
    ///
    /// let tables = Tables::builtin();
    /// assert_eq!(1900..=2100, tables.years());
    /// assert_eq!(Some(6), tables.leap_month(2017));
    /// ```
    pub fn builtin() -> &'static Tables {
        &BUILTIN
    }

    /// 由 TOML 文本载入历表。
    pub fn from_toml(text: &str) -> Result<Self, TableError> {
        let config: TableConfig = toml::from_str(text)?;
        Self::from_config(config)
    }

    /// 由配置构造历表并校验，锚点须与月长表一致。
    #[instrument(skip(config), fields(first_year = config.first_year, years = config.month_info.len()))]
    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        if config.month_info.is_empty() {
            return Err(TableError::Empty);
        }
        for (year, &info) in (config.first_year..).zip(&config.month_info) {
            let leap = info & 0xf;
            if leap > 12 {
                return Err(TableError::InvalidLeapMonth { year, leap });
            }
        }
        let jie = TermTable::from_config("jie", config.jie)?;
        let qi = TermTable::from_config("qi", config.qi)?;

        let mut tables = Tables {
            first_year: config.first_year,
            month_info: config.month_info,
            year_starts: Vec::new(),
            anchors: Vec::new(),
            day_cycle_base: config.day_cycle_base % 60,
            term_base_year: config.term_base_year,
            jie,
            qi,
        };
        let mut total = 0;
        tables.year_starts.push(0);
        for year in tables.years() {
            total += tables.days_in_year(year);
            tables.year_starts.push(total);
        }

        if config.anchors.is_empty() {
            return Err(TableError::NoAnchors);
        }
        let mut anchors = Vec::with_capacity(config.anchors.len());
        for (index, anchor) in config.anchors.iter().enumerate() {
            let invalid = |source| TableError::InvalidAnchor { index, source };
            let [y, m, d] = anchor.solar;
            let solar = Date::new(y, m, d).map_err(invalid)?;
            let [y, m, d] = anchor.lunar;
            let month = Month::from_signed(m).map_err(invalid)?;
            let elapsed = convert::elapsed_days(&tables, y, month, d).map_err(invalid)?;
            anchors.push((
                Anchor {
                    solar,
                    year: y,
                    month,
                    day: d as u32,
                },
                elapsed,
            ));
        }
        if anchors.windows(2).any(|w| w[0].0.solar >= w[1].0.solar) {
            return Err(TableError::UnorderedAnchors);
        }
        let (epoch, epoch_elapsed) = anchors[0];
        for (index, (anchor, elapsed)) in anchors.iter().enumerate().skip(1) {
            let days = (anchor.solar - epoch.solar) - (elapsed - epoch_elapsed);
            if days != 0 {
                return Err(TableError::InconsistentAnchor { index, days });
            }
        }
        tables.anchors = anchors.into_iter().map(|(a, _)| a).collect();

        debug!(
            years = ?tables.years(),
            anchors = tables.anchors.len(),
            overrides = tables.jie.overrides.len() + tables.qi.overrides.len(),
            "calendar tables loaded"
        );
        Ok(tables)
    }

    fn info(&self, year: i32) -> Option<u32> {
        let idx = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        self.month_info.get(idx).copied()
    }

    fn days_in_year(&self, year: i32) -> i64 {
        convert::months_of(self, year)
            .filter_map(|m| self.days_in_month(year, m))
            .map(i64::from)
            .sum()
    }
}

impl Provider for Tables {
    fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.first_year + self.month_info.len() as i32 - 1
    }

    fn leap_month(&self, year: i32) -> Option<u32> {
        self.info(year).map(|info| info & 0xf).filter(|&m| m != 0)
    }

    fn days_in_month(&self, year: i32, month: Month) -> Option<u32> {
        let info = self.info(year)?;
        let big = match month {
            Month::Common(m @ 1..=12) => info & (0x10000 >> m) != 0,
            Month::Leap(m @ 1..=12) if info & 0xf == m => info & 0x10000 != 0,
            _ => return None,
        };
        Some(if big { 30 } else { 29 })
    }

    fn days_before_year(&self, year: i32) -> Option<i64> {
        let idx = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        self.year_starts.get(idx).copied()
    }

    fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    fn day_cycle_base(&self) -> u32 {
        self.day_cycle_base
    }

    fn term_base_year(&self) -> i32 {
        self.term_base_year
    }

    fn term_table(&self, kind: TermKind) -> &TermTable {
        match kind {
            TermKind::Jie => &self.jie,
            TermKind::Qi => &self.qi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn builtin_shape() {
        let t = Tables::builtin();
        assert_eq!(1900..=2100, t.years());
        assert_eq!(2, t.anchors().len());
        assert_eq!("1901-01-01", t.epoch().solar.iso_gregorian());
        assert_eq!((1900, Common(11), 11), (t.epoch().year, t.epoch().month, t.epoch().day));
        assert_eq!(15, t.day_cycle_base());
        assert_eq!(1901, t.term_base_year());
    }

    #[test]
    fn leap_months() {
        let t = Tables::builtin();
        for (year, leap) in [
            (1900, Some(8)),
            (2000, None),
            (2017, Some(6)),
            (2020, Some(4)),
            (2023, Some(2)),
            (2024, None),
            (2033, Some(11)),
            (2101, None),
        ] {
            assert_eq!(leap, t.leap_month(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        let t = Tables::builtin();
        assert_eq!(Some(29), t.days_in_month(2017, Common(6)));
        assert_eq!(Some(30), t.days_in_month(2017, Leap(6)));
        assert_eq!(None, t.days_in_month(2017, Leap(5)));
        assert_eq!(None, t.days_in_month(2017, Common(13)));
        assert_eq!(None, t.days_in_month(1899, Common(1)));
        assert_eq!(384, t.days_in_year(2017));
        assert_eq!(354, t.days_in_year(2024));
    }

    #[test]
    fn year_starts_match_default_summation() {
        struct Summing<'a>(&'a Tables);
        impl Provider for Summing<'_> {
            fn years(&self) -> RangeInclusive<i32> {
                self.0.years()
            }
            fn leap_month(&self, year: i32) -> Option<u32> {
                self.0.leap_month(year)
            }
            fn days_in_month(&self, year: i32, month: Month) -> Option<u32> {
                self.0.days_in_month(year, month)
            }
            fn anchors(&self) -> &[Anchor] {
                self.0.anchors()
            }
            fn day_cycle_base(&self) -> u32 {
                self.0.day_cycle_base()
            }
            fn term_base_year(&self) -> i32 {
                self.0.term_base_year()
            }
            fn term_table(&self, kind: TermKind) -> &TermTable {
                self.0.term_table(kind)
            }
        }
        let t = Tables::builtin();
        let s = Summing(t);
        for year in [1900, 1901, 1950, 2000, 2100, 2101] {
            assert_eq!(t.days_before_year(year), s.days_before_year(year), "{year}");
        }
        assert_eq!(None, t.days_before_year(2102));
        assert_eq!(None, s.days_before_year(1899));
    }

    #[test]
    fn term_table_rows() {
        let jie = Tables::builtin().term_table(TermKind::Jie);
        assert_eq!(&[13, 46, 83, 116, 149, 182, 201], jie.cutovers(1));
        assert_eq!(28, jie.days(1).len());
        assert_eq!(7, jie.days(1)[0]);
        assert!(jie.cutovers(0).is_empty());
        assert!(jie.days(13).is_empty());
        assert_eq!(Some(7), jie.override_day(2, 6));
        assert_eq!(None, jie.override_day(3, 6));
    }

    fn config() -> TableConfig {
        toml::from_str(RAW_TABLES).unwrap()
    }

    #[test]
    fn rejects_inconsistent_anchor() {
        let mut c = config();
        c.anchors[1].lunar = [1999, 11, 24];
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::InconsistentAnchor { index: 1, days: 1 })
        ));
    }

    #[test]
    fn rejects_bad_anchor_fields() {
        let mut c = config();
        c.anchors[1].lunar = [1999, -11, 25];
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::InvalidAnchor {
                index: 1,
                source: Error::MissingLeapMonth { year: 1999, month: 11 }
            })
        ));
        let mut c = config();
        c.anchors[0].solar = [1901, 2, 30];
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::InvalidAnchor { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_unordered_anchors() {
        let mut c = config();
        c.anchors.swap(0, 1);
        assert!(matches!(Tables::from_config(c), Err(TableError::UnorderedAnchors)));
        let mut c = config();
        c.anchors.clear();
        assert!(matches!(Tables::from_config(c), Err(TableError::NoAnchors)));
    }

    #[test]
    fn rejects_malformed_terms() {
        let mut c = config();
        c.jie.days[2].pop();
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::MalformedRow { table: "jie", month: 3, .. })
        ));
        let mut c = config();
        c.qi.cutovers.pop();
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::RowCount { table: "qi", rows: 11, .. })
        ));
        let mut c = config();
        c.qi.overrides.push([5, 13, 1]);
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::InvalidOverride { table: "qi", entry: [5, 13, 1] })
        ));
    }

    #[test]
    fn rejects_bad_leap_code() {
        let mut c = config();
        c.month_info[3] = 0x0000d;
        assert!(matches!(
            Tables::from_config(c),
            Err(TableError::InvalidLeapMonth { year: 1903, leap: 13 })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let text = format!("{RAW_TABLES}\nextra = 1\n");
        assert!(matches!(Tables::from_toml(&text), Err(TableError::Parse(_))));
    }
}
