use chrono::{Datelike, NaiveDate};

use crate::core::date::parse_date;

/// 主數 (master numbers) 不再往下約簡
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// 反覆加總位數直到 <= 9 或遇到主數
pub fn reduce(mut total: u32) -> u32 {
    while total > 9 && !MASTER_NUMBERS.contains(&total) {
        total = digit_sum(total);
    }
    total
}

/// 生命靈數：`YYYYMMDD` 所有位數相加後約簡
pub fn life_path(date: &NaiveDate) -> u32 {
    let digits = format!("{:04}{:02}{:02}", date.year(), date.month(), date.day());
    let total = digits.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce(total)
}

pub fn life_path_from_date(input: &str) -> Option<u32> {
    parse_date(input).as_ref().map(life_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_sum() {
        // 2+0+0+0+0+1+0+1 = 4
        assert_eq!(life_path_from_date("2000-01-01"), Some(4));
    }

    #[test]
    fn test_multi_step_reduction() {
        // 41 -> 5
        assert_eq!(life_path_from_date("1999-11-29"), Some(5));
    }

    #[test]
    fn test_master_numbers_stop_reduction() {
        assert_eq!(life_path_from_date("2000-01-08"), Some(11));
        assert_eq!(life_path_from_date("2009-09-02"), Some(22));
        assert_eq!(life_path_from_date("1968-08-01"), Some(33));
        // 29 -> 11
        assert_eq!(life_path_from_date("1998-01-01"), Some(11));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(9), 9);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(99), 9);
    }

    #[test]
    fn test_invalid_date_has_no_life_path() {
        assert_eq!(life_path_from_date("1999-02-30"), None);
        assert_eq!(life_path_from_date(""), None);
    }
}
