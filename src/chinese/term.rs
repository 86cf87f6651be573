//! 节气定位
//!
//! 二十四节气每公历月各有一节一气。交节日按「距起算年的年数」`ry` 分段，
//! 段内以 `ry % 4` 周期取值，再以修正表校正个别年份。节与气各用一张表，查法相同。

use std::fmt;

use tracing::trace;

use super::provider::Provider;
use crate::date::Date;

/// 节或气。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TermKind {
    /// 节（月首，如立春、惊蛰）
    Jie,
    /// 气（月中，如雨水、春分）
    Qi,
}

/// 某公历月的节或气。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{SolarTerm, TermKind};
///
/// let term = SolarTerm::new(TermKind::Jie, 4);
/// assert_eq!(5, term.index());
/// assert_eq!("清明", term.name());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarTerm {
    kind: TermKind,
    month: u32,
}

impl SolarTerm {
    /// # Panics
    ///
    /// 若 `month` 不在 `1..=12` 间则 panic。
    pub fn new(kind: TermKind, month: u32) -> Self {
        assert!((1..=12).contains(&month), "month {month} not in 1..=12");
        Self { kind, month }
    }
    pub fn kind(&self) -> TermKind {
        self.kind
    }
    /// 所在公历月
    pub fn month(&self) -> u32 {
        self.month
    }
    /// 节气序号，`1..=24` 对应立春到大寒。
    pub fn index(&self) -> u32 {
        let jie = (2 * (self.month as i32 - 2)).rem_euclid(24) as u32 + 1;
        match self.kind {
            TermKind::Jie => jie,
            TermKind::Qi => jie % 24 + 1,
        }
    }
    pub fn name(&self) -> &'static str {
        super::fmt::solar_term(self.index())
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 取得公历 `year` 年 `month` 月节或气的交节日。
///
/// 年份早于节气表起算年，或晚于表中最后一段，则返回 `None`。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{Tables, TermKind, term};
///
/// assert_eq!(Some(5), term::term_day(Tables::builtin(), 2022, 4, TermKind::Jie));
/// assert_eq!(Some(20), term::term_day(Tables::builtin(), 2021, 4, TermKind::Qi));
/// ```
pub fn term_day<P: Provider + ?Sized>(provider: &P, year: i32, month: u32, kind: TermKind) -> Option<u32> {
    let ry = year - provider.term_base_year() + 1;
    if ry < 1 {
        return None;
    }
    let table = provider.term_table(kind);
    let era = table.cutovers(month).iter().position(|&cut| ry < cut)?;
    let day = *table.days(month).get(4 * era + (ry % 4) as usize)?;
    match table.override_day(ry, month) {
        Some(patched) => {
            trace!(year, month, ?kind, day, patched, "term day overridden");
            Some(patched)
        }
        None => Some(day),
    }
}

/// 若 `date` 当日交节或气，则返回之。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{Tables, TermKind, term};
///
/// let date = Date::from_gregorian(2022, 4, 5).unwrap();
/// let tables = Tables::builtin();
/// assert_eq!(Some("清明"), term::locate(tables, date, TermKind::Jie).map(|t| t.name()));
/// assert_eq!(None, term::locate(tables, date, TermKind::Qi));
/// ```
pub fn locate<P: Provider + ?Sized>(provider: &P, date: Date, kind: TermKind) -> Option<SolarTerm> {
    let (y, m, d) = date.gregorian();
    let month = m as u32;
    (term_day(provider, y, month, kind)? == d as u32).then(|| SolarTerm::new(kind, month))
}
