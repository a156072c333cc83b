use chrono::{Datelike, NaiveDate};

use crate::domain::model::MonthDay;

/// 解析 `YYYY-MM-DD`。格式錯誤或日期不存在時回傳 `None`，不會 panic。
///
/// 接受與 `strptime("%Y-%m-%d")` 相同的寫法：年份剛好四位數 (0001..=9999)，
/// 月份一或兩位數，日期一或兩位數或以空白補位 (例如 `2024-3- 5`)。
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let year = parse_digits(year, 4, 4)?;
    let month = parse_digits(month, 1, 2)?;
    let day = match day.strip_prefix(' ') {
        Some(rest) => parse_digits(rest, 1, 1).filter(|d| *d > 0)?,
        None => parse_digits(day, 1, 2)?,
    };

    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn parse_digits(field: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if field.len() < min_len || field.len() > max_len || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

pub fn month_day(date: &NaiveDate) -> MonthDay {
    MonthDay::new(date.month(), date.day())
}
