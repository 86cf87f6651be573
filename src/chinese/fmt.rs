//! 格式化日期相关功能

use std::fmt::Write;

use super::annotation::{self, Deity};
use super::{Lunar, Month};

/// 汉数字，第 `0..=9` 项为「〇」到「九」。
pub const NUM_CHINESE: &[&str] = &["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 天干
pub const STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支
pub const BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 生肖，与地支一一对应。
pub const SHENGXIAO: &[&str] = &[
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// 六十甲子序号（0 为甲子）转为文本形式。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(41));
/// ```
pub fn sexagenary(num: u32) -> String {
    STEMS[(num % 10) as usize].to_owned() + BRANCHES[(num % 12) as usize]
}

/// 年份逐位转为汉数字，不加「年」字。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("二〇二四", chinese::fmt::year(2024));
/// assert_eq!("一九〇一", chinese::fmt::year(1901));
/// ```
pub fn year(y: i32) -> String {
    let digits = y.unsigned_abs().to_string();
    let mut rt = String::with_capacity(digits.len() * 3 + 1);
    if y < 0 {
        rt.push('负');
    }
    for c in digits.bytes() {
        rt += NUM_CHINESE[(c - b'0') as usize];
    }
    rt
}

/// 取得月名（含「月」字）。十一、十二月称「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序号不在 `1..=12` 间则 panic。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日为「初一」到「初十」，第 21 至 29 日为「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序号不在 `1..=30` 间则 panic。
pub fn day(d: u32) -> String {
    let (prefix, digit) = match d {
        1..=9 => ("初", NUM_CHINESE[d as usize]),
        10 => ("初", "十"),
        11..=19 => ("十", NUM_CHINESE[(d % 10) as usize]),
        20 => ("二", "十"),
        21..=29 => ("廿", NUM_CHINESE[(d % 10) as usize]),
        30 => ("三", "十"),
        _ => panic!("day {} not in 1..=30", d),
    };
    prefix.to_owned() + digit
}

/// 节气序号转为名称。`1..=24` 分别为立春到大寒。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(6));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
        "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[term.rem_euclid(24) as usize]
}

/// 星期名，ISO 编号 `1..=7` 对应一至日。
pub fn week(day_of_week: i32) -> &'static str {
    const NAMES: &[&str] = &["日", "一", "二", "三", "四", "五", "六"];
    NAMES[day_of_week.rem_euclid(7) as usize]
}

/// 组合完整描述：日期、干支、节日、节气、宿、彭祖百忌、神位、冲煞。
pub(crate) fn full(lunar: &Lunar) -> String {
    let day = lunar.day_sexagenary();
    let mut s = format!(
        "{} {}({})年{}月{}日",
        lunar,
        lunar.year_sexagenary(),
        lunar.shengxiao(),
        lunar.month_sexagenary(),
        day,
    );
    for festival in lunar.festivals().iter().chain(lunar.other_festivals()) {
        let _ = write!(s, " ({festival})");
    }
    let terms: String = [lunar.jie(), lunar.qi()].into_iter().flatten().map(|t| t.name()).collect();
    if !terms.is_empty() {
        let _ = write!(s, " [{terms}]");
    }
    let lodge = lunar.lodge();
    let palace = lodge.palace();
    let _ = write!(
        s,
        " {}方{} {}{}{} 彭祖百忌[{} {}]",
        palace.name(),
        palace.beast(),
        lodge.name(),
        lodge.government(),
        lodge.animal(),
        annotation::pengzu_stem(day.stem()),
        annotation::pengzu_branch(day.branch()),
    );
    for deity in Deity::ALL {
        let trigram = deity.position(day.stem());
        let _ = write!(
            s,
            " {}方位[{}]({})",
            deity.name(),
            trigram,
            annotation::position_desc(trigram).unwrap_or_default(),
        );
    }
    let _ = write!(s, " 冲[{}] 刹[{}]", lunar.chong_desc(), lunar.sha());
    s
}
