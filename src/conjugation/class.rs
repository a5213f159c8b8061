use crate::core::utils::katakana_to_hiragana;

/// Inflection family read from a token's conjugation-type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugationClass {
    /// 五段 verbs, keyed by the hiragana of their consonant row in the a-grade
    /// (`か` for 五段-カ行, `わ` for 五段-ワア行).
    Godan { row: char },
    Ichidan,
    Suru,
    Kuru,
    Adjective,
    /// A label this crate has no paradigm for (文語, 助動詞-タ...).
    Other,
    /// Non-inflecting words carry no label.
    Uninflected,
}

const GODAN_ROWS: [char; 14] =
    ['あ', 'か', 'が', 'さ', 'ざ', 'た', 'だ', 'な', 'は', 'ば', 'ぱ', 'ま', 'ら', 'わ'];

fn godan_row(label: &str) -> Option<char> {
    let row = katakana_to_hiragana(label.chars().nth(3)?);
    GODAN_ROWS.contains(&row).then_some(row)
}

impl From<&str> for ConjugationClass {
    fn from(label: &str) -> Self {
        if label.is_empty() || label == "*" {
            return ConjugationClass::Uninflected;
        }
        if label.starts_with("五段") {
            return godan_row(label)
                .map_or(ConjugationClass::Other, |row| ConjugationClass::Godan { row });
        }
        if label.starts_with("上一段") || label.starts_with("下一段") {
            return ConjugationClass::Ichidan;
        }
        if label.starts_with("サ行変格") {
            return ConjugationClass::Suru;
        }
        if label.starts_with("カ行変格") {
            return ConjugationClass::Kuru;
        }
        if label.starts_with("形容詞") {
            return ConjugationClass::Adjective;
        }
        ConjugationClass::Other
    }
}

impl ConjugationClass {
    /// Textbook verb group: 1 for godan, 2 for ichidan, 3 for する and 来る.
    pub fn verb_group(&self) -> Option<u8> {
        match self {
            ConjugationClass::Godan { .. } => Some(1),
            ConjugationClass::Ichidan => Some(2),
            ConjugationClass::Suru | ConjugationClass::Kuru => Some(3),
            _ => None,
        }
    }
}

/// Moves an a-grade row kana to grade `n` (0 = a, 1 = i, 2 = u, 3 = e, 4 = o).
///
/// The hiragana block interleaves voiced and semi-voiced kana, so the distance
/// between grades depends on the row: one code point for な/ま/ら, two for the
/// rows paired with a voiced row, three for は/ば/ぱ. The た and だ rows hold
/// the small っ and do not follow a fixed step. わ shares the vowels of あ past
/// the a-grade.
pub fn shift_grade(row: char, n: u32) -> Option<char> {
    if n > 4 {
        return None;
    }
    if n == 0 {
        return GODAN_ROWS.contains(&row).then_some(row);
    }
    let step = match row {
        'な' | 'ま' | 'ら' => 1,
        'あ' | 'か' | 'が' | 'さ' | 'ざ' => 2,
        'は' | 'ば' | 'ぱ' => 3,
        'た' => return ['ち', 'つ', 'て', 'と'].get(n as usize - 1).copied(),
        'だ' => return ['ぢ', 'づ', 'で', 'ど'].get(n as usize - 1).copied(),
        'わ' => return shift_grade('あ', n),
        _ => return None,
    };
    char::from_u32(row as u32 + step * n)
}
