//! 西洋星座表與查詢。
//!
//! `SIGNS` 依牡羊座起算的固定順序排列，12 個區間涵蓋整年且互不重疊；
//! 摩羯座跨越年底 (12-22 ~ 01-19)。

use chrono::{Datelike, NaiveDate};

use crate::core::date::{month_day, parse_date};
use crate::domain::model::{Element, Modality, MonthDay, Planet, SignRecord};

pub static SIGNS: [SignRecord; 12] = [
    SignRecord {
        key: "aries",
        name_ka: "ვერძი",
        name_en: "Aries",
        symbol: "♈️",
        start: MonthDay::new(3, 21),
        end: MonthDay::new(4, 19),
        element: Element::Fire,
        modality: Modality::Cardinal,
        planet: Planet::Mars,
        blurb: "ვერძი აქტიური, უშიშარი და წამყვანი ნიშნაა.",
    },
    SignRecord {
        key: "taurus",
        name_ka: "კურო",
        name_en: "Taurus",
        symbol: "♉️",
        start: MonthDay::new(4, 20),
        end: MonthDay::new(5, 20),
        element: Element::Earth,
        modality: Modality::Fixed,
        planet: Planet::Venus,
        blurb: "კურო აფასებს კომფორტს, საიმედოობას და გრძელვადიან სისწორეს.",
    },
    SignRecord {
        key: "gemini",
        name_ka: "ტყუპები",
        name_en: "Gemini",
        symbol: "♊️",
        start: MonthDay::new(5, 21),
        end: MonthDay::new(6, 20),
        element: Element::Air,
        modality: Modality::Mutable,
        planet: Planet::Mercury,
        blurb: "ტყუპები სწრაფად აზროვნებს, უყვარს საუბარი და იდეების გაცვლა.",
    },
    SignRecord {
        key: "cancer",
        name_ka: "კირჩხიბი",
        name_en: "Cancer",
        symbol: "♋️",
        start: MonthDay::new(6, 21),
        end: MonthDay::new(7, 22),
        element: Element::Water,
        modality: Modality::Cardinal,
        planet: Planet::Moon,
        blurb: "კირჩხიბი ოჯახზე და ემოციებზეა ორიენტირებული.",
    },
    SignRecord {
        key: "leo",
        name_ka: "ლომი",
        name_en: "Leo",
        symbol: "♌️",
        start: MonthDay::new(7, 23),
        end: MonthDay::new(8, 22),
        element: Element::Fire,
        modality: Modality::Fixed,
        planet: Planet::Sun,
        blurb: "ლომი ბრწყინავს სცენაზე — გულუხვი და შემოქმედებითი.",
    },
    SignRecord {
        key: "virgo",
        name_ka: "ქალწული",
        name_en: "Virgo",
        symbol: "♍️",
        start: MonthDay::new(8, 23),
        end: MonthDay::new(9, 22),
        element: Element::Earth,
        modality: Modality::Mutable,
        planet: Planet::Mercury,
        blurb: "ქალწული დეტალებში პოულობს სრულყოფას.",
    },
    SignRecord {
        key: "libra",
        name_ka: "სასწორი",
        name_en: "Libra",
        symbol: "♎️",
        start: MonthDay::new(9, 23),
        end: MonthDay::new(10, 22),
        element: Element::Air,
        modality: Modality::Cardinal,
        planet: Planet::Venus,
        blurb: "სასწორი ბალანსს ეძებს და სილამაზეს აფასებს.",
    },
    SignRecord {
        key: "scorpio",
        name_ka: "მორიელი",
        name_en: "Scorpio",
        symbol: "♏️",
        start: MonthDay::new(10, 23),
        end: MonthDay::new(11, 21),
        element: Element::Water,
        modality: Modality::Fixed,
        planet: Planet::Pluto,
        blurb: "მორიელი ინტენსიურია — სიმართლის ძიება და ემოციური სიღრმე მისი სტიქიაა.",
    },
    SignRecord {
        key: "sagittarius",
        name_ka: "მშვილდოსანი",
        name_en: "Sagittarius",
        symbol: "♐️",
        start: MonthDay::new(11, 22),
        end: MonthDay::new(12, 21),
        element: Element::Fire,
        modality: Modality::Mutable,
        planet: Planet::Jupiter,
        blurb: "მშვილდოსანი მოგზაური და ფილოსოფოსია.",
    },
    SignRecord {
        key: "capricorn",
        name_ka: "თხის რქა",
        name_en: "Capricorn",
        symbol: "♑️",
        start: MonthDay::new(12, 22),
        end: MonthDay::new(1, 19),
        element: Element::Earth,
        modality: Modality::Cardinal,
        planet: Planet::Saturn,
        blurb: "თხის რქა მიზანდასახულია.",
    },
    SignRecord {
        key: "aquarius",
        name_ka: "მერწყული",
        name_en: "Aquarius",
        symbol: "♒️",
        start: MonthDay::new(1, 20),
        end: MonthDay::new(2, 18),
        element: Element::Air,
        modality: Modality::Fixed,
        planet: Planet::Uranus,
        blurb: "მერწყული ორიგინალური და ინოვატორია.",
    },
    SignRecord {
        key: "pisces",
        name_ka: "თევზები",
        name_en: "Pisces",
        symbol: "♓️",
        start: MonthDay::new(2, 19),
        end: MonthDay::new(3, 20),
        element: Element::Water,
        modality: Modality::Mutable,
        planet: Planet::Neptune,
        blurb: "თევზები ოცნებებს მატერიალიზებს.",
    },
];

pub fn find_by_key(key: &str) -> Option<&'static SignRecord> {
    SIGNS.iter().find(|sign| sign.key == key)
}

/// 依月日找出西洋星座，依表格順序回傳第一個符合的記錄
pub fn western_sign(date: &NaiveDate) -> Option<&'static SignRecord> {
    let day = month_day(date);
    SIGNS.iter().find(|sign| sign.contains(day))
}

pub fn sign_from_date(input: &str) -> Option<&'static SignRecord> {
    parse_date(input).as_ref().and_then(western_sign)
}

/// 月亮星座的佔位實作：直接以出生月份對應表格第 `(month - 1) % 12` 筆。
///
/// 這不是天文計算，沒有經過任何星曆驗證；要得到真正的月亮星座需要出生時間與星曆表。
pub fn moon_sign(date: &NaiveDate) -> &'static SignRecord {
    &SIGNS[(date.month0() % 12) as usize]
}

pub fn moon_sign_from_date(input: &str) -> Option<&'static SignRecord> {
    parse_date(input).as_ref().map(moon_sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_partitions_leap_year() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            let day = month_day(&date);
            let matches = SIGNS.iter().filter(|sign| sign.contains(day)).count();
            assert_eq!(matches, 1, "{} matched {} signs", day, matches);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, sign) in SIGNS.iter().enumerate() {
            assert!(SIGNS[i + 1..].iter().all(|other| other.key != sign.key));
        }
    }

    #[test]
    fn test_only_capricorn_wraps() {
        let wrapping: Vec<&str> = SIGNS
            .iter()
            .filter(|sign| sign.wraps_year_end())
            .map(|sign| sign.key)
            .collect();
        assert_eq!(wrapping, vec!["capricorn"]);
    }

    #[test]
    fn test_sign_from_date() {
        assert_eq!(sign_from_date("2024-03-21").unwrap().key, "aries");
        assert_eq!(sign_from_date("2024-03-20").unwrap().key, "pisces");
        assert_eq!(sign_from_date("2024-04-19").unwrap().key, "aries");
        assert_eq!(sign_from_date("2024-04-20").unwrap().key, "taurus");
        assert_eq!(sign_from_date("2024-02-29").unwrap().key, "pisces");
    }

    #[test]
    fn test_sign_from_date_wraps_year_end() {
        assert_eq!(sign_from_date("2024-01-01").unwrap().key, "capricorn");
        assert_eq!(sign_from_date("2023-12-22").unwrap().key, "capricorn");
        assert_eq!(sign_from_date("2023-12-21").unwrap().key, "sagittarius");
        assert_eq!(sign_from_date("2024-01-19").unwrap().key, "capricorn");
        assert_eq!(sign_from_date("2024-01-20").unwrap().key, "aquarius");
    }

    #[test]
    fn test_sign_from_invalid_date() {
        assert!(sign_from_date("not-a-date").is_none());
        assert!(sign_from_date("").is_none());
    }

    #[test]
    fn test_moon_sign_follows_month() {
        assert_eq!(moon_sign_from_date("2024-01-31").unwrap().key, "aries");
        assert_eq!(moon_sign_from_date("2024-06-15").unwrap().key, "virgo");
        assert_eq!(moon_sign_from_date("2024-12-01").unwrap().key, "pisces");
        assert!(moon_sign_from_date("garbage").is_none());
    }

    #[test]
    fn test_find_by_key() {
        assert_eq!(find_by_key("leo").unwrap().name_en, "Leo");
        assert!(find_by_key("ophiuchus").is_none());
    }
}
