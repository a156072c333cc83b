use chrono::{Datelike, NaiveDate};

use crate::core::chinese::chinese_zodiac;
use crate::core::compatibility::compatibility;
use crate::core::date::parse_date;
use crate::core::numerology::life_path;
use crate::core::zodiac::{moon_sign, western_sign};
use crate::domain::model::{CalcRequest, CalcResponse, Profile};

impl Profile {
    pub fn from_date(date: &NaiveDate) -> Self {
        Self {
            western: western_sign(date),
            moon: Some(moon_sign(date)),
            chinese: Some(chinese_zodiac(date.year())),
            life_path: Some(life_path(date)),
        }
    }

    /// 空字串或無法解析的日期會得到所有欄位皆為 `None` 的 profile
    pub fn from_date_str(input: &str) -> Self {
        parse_date(input)
            .map(|date| Self::from_date(&date))
            .unwrap_or_default()
    }
}

pub fn calculate(request: &CalcRequest) -> CalcResponse {
    let me = Profile::from_date_str(&request.my_date);
    let partner = Profile::from_date_str(&request.partner_date);
    CalcResponse {
        me,
        partner,
        compatibility: compatibility(me.western, partner.western),
    }
}
