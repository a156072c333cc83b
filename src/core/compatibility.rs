use crate::domain::model::{CompatibilityResult, Element, SignRecord};

const BASE_SCORE: i32 = 50;
const SAME_ELEMENT_BONUS: i32 = 20;
const HARMONIOUS_BONUS: i32 = 15;
const CHALLENGING_PENALTY: i32 = 10;
const SAME_MODALITY_BONUS: i32 = 10;
const SAME_PLANET_BONUS: i32 = 5;

const STRONG_THRESHOLD: u8 = 75;
const GOOD_THRESHOLD: u8 = 50;

pub const HARMONIOUS_PAIRS: [(Element, Element); 4] = [
    (Element::Fire, Element::Air),
    (Element::Air, Element::Fire),
    (Element::Earth, Element::Water),
    (Element::Water, Element::Earth),
];

pub const CHALLENGING_PAIRS: [(Element, Element); 4] = [
    (Element::Fire, Element::Water),
    (Element::Water, Element::Fire),
    (Element::Air, Element::Earth),
    (Element::Earth, Element::Air),
];

pub const NOTE_INSUFFICIENT_DATA: &str = "მონაცემები საკმარისი არაა";
pub const NOTE_STRONG: &str = "✨ ძალიან ძლიერი თავსებადობა!";
pub const NOTE_GOOD: &str = "😊 კარგი შანსი ურთიერთობისთვის.";
pub const NOTE_NEEDS_WORK: &str = "⚠️ მეტი მუშაობა დაგჭირდებათ ურთიერთობაზე.";

fn raw_score(a: &SignRecord, b: &SignRecord) -> i32 {
    let pair = (a.element, b.element);
    let mut score = BASE_SCORE;

    if a.element == b.element {
        score += SAME_ELEMENT_BONUS;
    }
    if HARMONIOUS_PAIRS.contains(&pair) {
        score += HARMONIOUS_BONUS;
    }
    if CHALLENGING_PAIRS.contains(&pair) {
        score -= CHALLENGING_PENALTY;
    }
    if a.modality == b.modality {
        score += SAME_MODALITY_BONUS;
    }
    if a.planet == b.planet {
        score += SAME_PLANET_BONUS;
    }
    score
}

fn note_for(score: u8) -> &'static str {
    if score >= STRONG_THRESHOLD {
        NOTE_STRONG
    } else if score >= GOOD_THRESHOLD {
        NOTE_GOOD
    } else {
        NOTE_NEEDS_WORK
    }
}

/// 任一方缺少星座時回傳 0 分，不視為錯誤
pub fn compatibility(a: Option<&SignRecord>, b: Option<&SignRecord>) -> CompatibilityResult {
    let (Some(a), Some(b)) = (a, b) else {
        return CompatibilityResult {
            score: 0,
            note: NOTE_INSUFFICIENT_DATA,
        };
    };

    let score = raw_score(a, b).clamp(0, 100) as u8;
    CompatibilityResult {
        score,
        note: note_for(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zodiac::{find_by_key, SIGNS};

    fn score(a: &str, b: &str) -> CompatibilityResult {
        compatibility(find_by_key(a), find_by_key(b))
    }

    #[test]
    fn test_harmonious_pair() {
        let result = score("aries", "gemini");
        assert_eq!(result.score, 65);
        assert_eq!(result.note, NOTE_GOOD);
    }

    #[test]
    fn test_same_sign_is_strong() {
        // 50 + 20 + 10 + 5
        let result = score("aries", "aries");
        assert_eq!(result.score, 85);
        assert_eq!(result.note, NOTE_STRONG);
    }

    #[test]
    fn test_challenging_pair() {
        assert_eq!(score("aries", "pisces").score, 40);
        assert_eq!(score("aries", "pisces").note, NOTE_NEEDS_WORK);
        // -10 + 同為 Cardinal
        assert_eq!(score("aries", "cancer").score, 50);
        assert_eq!(score("aries", "cancer").note, NOTE_GOOD);
        // -10 + Mutable + Mercury
        assert_eq!(score("gemini", "virgo").score, 55);
    }

    #[test]
    fn test_neutral_pair() {
        // Fire / Earth：沒有任何加減分
        assert_eq!(score("aries", "taurus").score, 50);
    }

    #[test]
    fn test_missing_sign_short_circuits() {
        let aries = find_by_key("aries");
        for result in [
            compatibility(None, aries),
            compatibility(aries, None),
            compatibility(None, None),
        ] {
            assert_eq!(result.score, 0);
            assert_eq!(result.note, NOTE_INSUFFICIENT_DATA);
        }
    }

    #[test]
    fn test_every_pair_is_in_range_and_symmetric() {
        for a in SIGNS.iter() {
            for b in SIGNS.iter() {
                let forward = compatibility(Some(a), Some(b));
                assert!(forward.score <= 100);
                assert_eq!(forward, compatibility(Some(b), Some(a)));
            }
        }
    }
}
