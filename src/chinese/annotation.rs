//! 黄历注释：二十八宿、彭祖百忌、神位、冲煞、节日
//!
//! 皆为由已算得的干支序号、农历月日查表，查无则返回空，不报错。

use super::Lunar;

/// 二十八宿，自角宿起，东方七宿、北方七宿、西方七宿、南方七宿依次排列。
const LODGES: [&str; 28] = [
    "角", "亢", "氐", "房", "心", "尾", "箕", "斗", "牛", "女", "虚", "危", "室", "壁", "奎", "娄",
    "胃", "昴", "毕", "觜", "参", "井", "鬼", "柳", "星", "张", "翼", "轸",
];
/// 七政，按宿序循环。
const GOVERNMENTS: [&str; 7] = ["木", "金", "土", "日", "月", "火", "水"];
const LODGE_ANIMALS: [&str; 28] = [
    "蛟", "龙", "貉", "兔", "狐", "虎", "豹", "獬", "牛", "蝠", "鼠", "燕", "猪", "貐", "狼", "狗",
    "雉", "鸡", "乌", "猴", "猿", "犴", "羊", "獐", "马", "鹿", "蛇", "蚓",
];
/// 各月初一所值之宿：正室二奎三胃，四毕五参六鬼，七张八角九氐，十心冬斗腊虚。
const LODGE_MONTH_START: [u32; 12] = [12, 14, 16, 18, 20, 22, 25, 0, 2, 4, 7, 10];

/// 二十八宿之一。
///
/// # 用例
///
/// ```
/// use nongli::chinese::annotation::lodge;
///
/// let xiu = lodge(4, 21).unwrap();
/// assert_eq!(("虚", "日", "鼠"), (xiu.name(), xiu.government(), xiu.animal()));
/// assert_eq!(("北", "玄武"), (xiu.palace().name(), xiu.palace().beast()));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Lodge(u32);

impl Lodge {
    /// 农历日期当日值宿。
    pub fn of(lunar: &Lunar) -> Self {
        Self::at(lunar.month().num(), lunar.day())
    }
    fn at(month: u32, day: u32) -> Self {
        Lodge((LODGE_MONTH_START[(month - 1) as usize] + day - 1) % 28)
    }
    /// 宿序，0 为角宿。
    pub fn index(&self) -> u32 {
        self.0
    }
    pub fn name(&self) -> &'static str {
        LODGES[self.0 as usize]
    }
    /// 所值七政
    pub fn government(&self) -> &'static str {
        GOVERNMENTS[(self.0 % 7) as usize]
    }
    /// 所配禽兽
    pub fn animal(&self) -> &'static str {
        LODGE_ANIMALS[self.0 as usize]
    }
    /// 所属宫
    pub fn palace(&self) -> Palace {
        match self.0 / 7 {
            0 => Palace::East,
            1 => Palace::North,
            2 => Palace::West,
            _ => Palace::South,
        }
    }
}

/// 四宫。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Palace {
    East,
    North,
    West,
    South,
}

impl Palace {
    pub fn name(&self) -> &'static str {
        match self {
            Palace::East => "东",
            Palace::North => "北",
            Palace::West => "西",
            Palace::South => "南",
        }
    }
    /// 四象
    pub fn beast(&self) -> &'static str {
        match self {
            Palace::East => "青龙",
            Palace::North => "玄武",
            Palace::West => "白虎",
            Palace::South => "朱雀",
        }
    }
}

/// 由农历月序号（不论平闰）与日取得当日值宿。
pub fn lodge(month: u32, day: u32) -> Option<Lodge> {
    ((1..=12).contains(&month) && (1..=30).contains(&day)).then(|| Lodge::at(month, day))
}

/// 彭祖百忌（天干）。
pub fn pengzu_stem(stem: u32) -> &'static str {
    const TABOOS: [&str; 10] = [
        "甲不开仓财物耗散",
        "乙不栽植千株不长",
        "丙不修灶必见灾殃",
        "丁不剃头头必生疮",
        "戊不受田田主不祥",
        "己不破券二比并亡",
        "庚不经络织机虚张",
        "辛不合酱主人不尝",
        "壬不泱水更难提防",
        "癸不词讼理弱敌强",
    ];
    TABOOS.get(stem as usize).copied().unwrap_or_default()
}

/// 彭祖百忌（地支）。
pub fn pengzu_branch(branch: u32) -> &'static str {
    const TABOOS: [&str; 12] = [
        "子不问卜自惹祸殃",
        "丑不冠带主不还乡",
        "寅不祭祀神鬼不尝",
        "卯不穿井水泉不香",
        "辰不哭泣必主重丧",
        "巳不远行财物伏藏",
        "午不苫盖屋主更张",
        "未不服药毒气入肠",
        "申不安床鬼祟入房",
        "酉不会客醉坐颠狂",
        "戌不吃犬作怪上床",
        "亥不嫁娶不利新郎",
    ];
    TABOOS.get(branch as usize).copied().unwrap_or_default()
}

/// 五神。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Deity {
    /// 喜神
    Joy,
    /// 阳贵神
    YangNoble,
    /// 阴贵神
    YinNoble,
    /// 福神
    Fortune,
    /// 财神
    Wealth,
}

impl Deity {
    pub const ALL: [Deity; 5] = [
        Deity::Joy,
        Deity::YangNoble,
        Deity::YinNoble,
        Deity::Fortune,
        Deity::Wealth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Deity::Joy => "喜神",
            Deity::YangNoble => "阳贵神",
            Deity::YinNoble => "阴贵神",
            Deity::Fortune => "福神",
            Deity::Wealth => "财神",
        }
    }

    /// 按日干取得神位所在卦位，日干越界则为空。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::annotation::{Deity, position_desc};
    ///
    /// // 癸日喜神在巽，即东南
    /// assert_eq!("巽", Deity::Joy.position(9));
    /// assert_eq!(Some("东南"), position_desc("巽"));
    /// ```
    pub fn position(&self, stem: u32) -> &'static str {
        const JOY: [&str; 10] = ["艮", "乾", "坤", "离", "巽", "艮", "乾", "坤", "离", "巽"];
        const YANG: [&str; 10] = ["坤", "坤", "兑", "乾", "艮", "坎", "离", "艮", "震", "巽"];
        const YIN: [&str; 10] = ["艮", "坎", "乾", "兑", "坤", "坤", "艮", "离", "巽", "震"];
        const FORTUNE: [&str; 10] = ["巽", "巽", "震", "震", "坎", "离", "坤", "坤", "乾", "兑"];
        const WEALTH: [&str; 10] = ["艮", "艮", "坤", "坤", "坎", "坎", "震", "震", "离", "离"];
        let table = match self {
            Deity::Joy => &JOY,
            Deity::YangNoble => &YANG,
            Deity::YinNoble => &YIN,
            Deity::Fortune => &FORTUNE,
            Deity::Wealth => &WEALTH,
        };
        table.get(stem as usize).copied().unwrap_or_default()
    }
}

/// 卦位所指方向。
pub fn position_desc(trigram: &str) -> Option<&'static str> {
    Some(match trigram {
        "坎" => "正北",
        "艮" => "东北",
        "震" => "正东",
        "巽" => "东南",
        "离" => "正南",
        "坤" => "西南",
        "兑" => "正西",
        "乾" => "西北",
        "中" => "中宫",
        _ => return None,
    })
}

/// 日支所冲之支（相隔六位）。
pub fn chong(branch: u32) -> u32 {
    (branch + 6) % 12
}

/// 无情之克：所冲之干，甲冲戊、乙冲己，依次类推。
pub fn chong_stem(stem: u32) -> u32 {
    (stem + 4) % 10
}

/// 有情之克：甲己、乙戊、丙辛、丁庚、戊癸、己壬、庚乙、辛甲、壬丁、癸丙。
pub fn chong_stem_tie(stem: u32) -> Option<u32> {
    const TIE: [u32; 10] = [5, 4, 7, 6, 9, 8, 1, 0, 3, 2];
    TIE.get(stem as usize).copied()
}

/// 煞方，按日支：申子辰煞南，亥卯未煞西，寅午戌煞北，巳酉丑煞东。
pub fn sha(branch: u32) -> &'static str {
    const SHA: [&str; 12] = ["南", "东", "北", "西", "南", "东", "北", "西", "南", "东", "北", "西"];
    SHA.get(branch as usize).copied().unwrap_or_default()
}

/// 农历固定节日，按月序号与日。
///
/// # 用例
///
/// ```
/// use nongli::chinese::annotation::festivals;
///
/// assert_eq!(["春节"], festivals(1, 1));
/// assert!(festivals(1, 2).is_empty());
/// ```
pub fn festivals(month: u32, day: u32) -> &'static [&'static str] {
    match (month, day) {
        (1, 1) => &["春节"],
        (1, 15) => &["元宵节"],
        (2, 2) => &["龙头节"],
        (5, 5) => &["端午节"],
        (7, 7) => &["七夕节"],
        (8, 15) => &["中秋节"],
        (9, 9) => &["重阳节"],
        (12, 8) => &["腊八节"],
        _ => &[],
    }
}

/// 民俗节日，同日可有多个。
pub fn other_festivals(month: u32, day: u32) -> &'static [&'static str] {
    match (month, day) {
        (1, 4) => &["接神日"],
        (1, 5) => &["隋唐送穷日"],
        (1, 7) => &["人日"],
        (1, 8) => &["谷日"],
        (1, 9) => &["天日"],
        (1, 10) => &["地日"],
        (1, 20) => &["天穿节"],
        (1, 25) => &["填仓节"],
        (1, 30) => &["正灯日"],
        (2, 1) => &["中和节"],
        (2, 2) => &["社日节"],
        (3, 3) => &["上巳节"],
        (5, 20) => &["分龙节"],
        (5, 25) => &["会龙节"],
        (6, 6) => &["天贶节"],
        (6, 24) => &["观莲节"],
        (6, 25) => &["五谷母节"],
        (7, 15) => &["中元节", "盂兰盆节"],
        (7, 22) => &["财神节"],
        (7, 29) => &["地藏节"],
        (8, 1) => &["天灸日"],
        (10, 1) => &["寒衣节"],
        (10, 10) => &["十成节"],
        (10, 15) => &["下元节"],
        (12, 7) => &["驱傩日"],
        (12, 16) => &["尾牙"],
        (12, 24) => &["祭灶日"],
        _ => &[],
    }
}

/// 季节名：孟、仲、季配春夏秋冬，按月序号。
pub fn season(month: u32) -> Option<&'static str> {
    const SEASONS: [&str; 12] = [
        "孟春", "仲春", "季春", "孟夏", "仲夏", "季夏", "孟秋", "仲秋", "季秋", "孟冬", "仲冬", "季冬",
    ];
    SEASONS.get(month.checked_sub(1)? as usize).copied()
}
