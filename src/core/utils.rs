//! Character-level classification and hiragana/katakana conversion.
//!
//! The hiragana block (U+3041..=U+3096) and the katakana block
//! (U+30A1..=U+30F6) are laid out in parallel, exactly `0x60` apart, so script
//! conversion is a fixed code-point shift.

const HIRAGANA_RANGE: (u32, u32) = (0x3041, 0x3096);
const KATAKANA_RANGE: (u32, u32) = (0x30A1, 0x30F6);
const KANA_OFFSET: u32 = 0x60;

const KANJI_RANGES: [(u32, u32); 3] = [
    (0x4E00, 0x9FFF), // CJK Unified Ideographs
    (0x3400, 0x4DBF), // Extension A
    (0xF900, 0xFAFF), // Compatibility Ideographs
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JapaneseCharType {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

fn in_range(c: char, (start, end): (u32, u32)) -> bool {
    (start..=end).contains(&(c as u32))
}

pub fn classify(c: char) -> JapaneseCharType {
    if in_range(c, HIRAGANA_RANGE) {
        JapaneseCharType::Hiragana
    } else if in_range(c, KATAKANA_RANGE) {
        JapaneseCharType::Katakana
    } else if KANJI_RANGES.iter().any(|&range| in_range(c, range)) {
        JapaneseCharType::Kanji
    } else {
        JapaneseCharType::Other
    }
}

pub fn is_hiragana(c: char) -> bool {
    classify(c) == JapaneseCharType::Hiragana
}

pub fn is_katakana(c: char) -> bool {
    classify(c) == JapaneseCharType::Katakana
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

fn shift(c: char, from: (u32, u32), offset: i64) -> char {
    if in_range(c, from) {
        char::from_u32((c as i64 + offset) as u32).unwrap_or(c)
    } else {
        c
    }
}

pub fn hiragana_to_katakana(c: char) -> char {
    shift(c, HIRAGANA_RANGE, KANA_OFFSET as i64)
}

pub fn katakana_to_hiragana(c: char) -> char {
    shift(c, KATAKANA_RANGE, -(KANA_OFFSET as i64))
}

/// Script helpers for Japanese strings. Characters outside the kana blocks
/// (digits, Latin, punctuation, ー) are left untouched.
pub trait KanaExt {
    fn to_katakana(&self) -> String;
    fn to_hiragana(&self) -> String;
    /// Non-empty and made only of hiragana or katakana.
    fn is_only_kana(&self) -> bool;
    /// Non-empty and made only of hiragana.
    fn is_only_hiragana(&self) -> bool;
}

impl KanaExt for str {
    fn to_katakana(&self) -> String {
        self.chars().map(hiragana_to_katakana).collect()
    }

    fn to_hiragana(&self) -> String {
        self.chars().map(katakana_to_hiragana).collect()
    }

    fn is_only_kana(&self) -> bool {
        !self.is_empty() && self.chars().all(is_kana)
    }

    fn is_only_hiragana(&self) -> bool {
        !self.is_empty() && self.chars().all(is_hiragana)
    }
}

/// Implement the trait for `String` by forwarding the method to `str`
impl KanaExt for String {
    fn to_katakana(&self) -> String {
        self.as_str().to_katakana()
    }

    fn to_hiragana(&self) -> String {
        self.as_str().to_hiragana()
    }

    fn is_only_kana(&self) -> bool {
        self.as_str().is_only_kana()
    }

    fn is_only_hiragana(&self) -> bool {
        self.as_str().is_only_hiragana()
    }
}
