use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// 月-日，忽略年份。排序即同一年內的先後順序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 星座表中的一筆記錄，欄位名稱沿用對外 JSON 格式
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SignRecord {
    pub key: &'static str,
    #[serde(rename = "ka")]
    pub name_ka: &'static str,
    #[serde(rename = "en")]
    pub name_en: &'static str,
    #[serde(rename = "emoji")]
    pub symbol: &'static str,
    pub start: MonthDay,
    pub end: MonthDay,
    pub element: Element,
    pub modality: Modality,
    pub planet: Planet,
    pub blurb: &'static str,
}

impl SignRecord {
    /// 跨年區間 (例如摩羯座 12-22 ~ 01-19)
    pub fn wraps_year_end(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, day: MonthDay) -> bool {
        if self.wraps_year_end() {
            day >= self.start || day <= self.end
        } else {
            day >= self.start && day <= self.end
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub western: Option<&'static SignRecord>,
    pub moon: Option<&'static SignRecord>,
    pub chinese: Option<&'static str>,
    pub life_path: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub note: &'static str,
}

/// `/api/calc` 的請求內容；缺少或非字串的欄位視為空字串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcRequest {
    pub my_date: String,
    pub partner_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalcResponse {
    pub me: Profile,
    pub partner: Profile,
    pub compatibility: CompatibilityResult,
}
