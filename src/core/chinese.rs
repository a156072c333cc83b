use serde::Serialize;

/// 十二生肖，以 1900 年 (鼠年) 為基準
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ALL_ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

const BASE_YEAR: i32 = 1900;

impl ChineseAnimal {
    /// 喬治亞文名稱，API 回傳的值
    pub const fn name_ka(self) -> &'static str {
        match self {
            Self::Rat => "ვირთხა",
            Self::Ox => "კუი",
            Self::Tiger => "ვეფხვი",
            Self::Rabbit => "კურდღელი",
            Self::Dragon => "დრაკონი",
            Self::Snake => "გველი",
            Self::Horse => "ცხენი",
            Self::Goat => "თხა",
            Self::Monkey => "მაიმუნი",
            Self::Rooster => "მამალი",
            Self::Dog => "ძაღლი",
            Self::Pig => "ღორი",
        }
    }

    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 僅依西曆年份計算，不處理農曆新年前出生的情況
    pub fn from_year(year: i32) -> Self {
        ALL_ANIMALS[(year - BASE_YEAR).rem_euclid(12) as usize]
    }
}

pub fn chinese_zodiac(year: i32) -> &'static str {
    ChineseAnimal::from_year(year).name_ka()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_year_is_rat() {
        assert_eq!(ChineseAnimal::from_year(1900), ChineseAnimal::Rat);
        assert_eq!(ChineseAnimal::from_year(1912), ChineseAnimal::Rat);
        assert_eq!(chinese_zodiac(1900), "ვირთხა");
    }

    #[test]
    fn test_known_years() {
        assert_eq!(ChineseAnimal::from_year(2024), ChineseAnimal::Dragon);
        assert_eq!(ChineseAnimal::from_year(2000), ChineseAnimal::Dragon);
        assert_eq!(ChineseAnimal::from_year(1999), ChineseAnimal::Rabbit);
        assert_eq!(ChineseAnimal::from_year(2023).name_en(), "Rabbit");
        assert_eq!(chinese_zodiac(2019), "ღორი");
    }

    #[test]
    fn test_years_before_base_wrap_around() {
        assert_eq!(ChineseAnimal::from_year(1899), ChineseAnimal::Pig);
        assert_eq!(ChineseAnimal::from_year(1888), ChineseAnimal::Rat);
        assert_eq!(ChineseAnimal::from_year(1), ChineseAnimal::Rooster);
    }
}
