//Unidic feature columns: https://gist.github.com/masayu-a/e3eee0637c07d4019ec9

use serde::Serialize;
use wana_kana::IsJapaneseStr;

use super::unidic_tags::UnidicTag;
use crate::conjugation::ConjugationClass;

/// One row exactly as the tagger produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibratoToken {
    pub surface: String,
    pub features: String,
}

impl From<vibrato::token::Token<'_, '_>> for VibratoToken {
    fn from(value: vibrato::token::Token) -> Self {
        Self {
            surface: value.surface().into(),
            features: value.feature().into(),
        }
    }
}

/// Named view of the UniDic feature string. Columns the tagger left out
/// (unknown words only carry the first six) read as `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub pos1: String,       // Column 1: Part of speech 1
    pub pos2: String,       // Column 2: Part of speech 2
    pub pos3: String,       // Column 3: Part of speech 3
    pub pos4: String,       // Column 4: Part of speech 4
    pub c_type: String,     // Column 5: Conjugation type
    pub c_form: String,     // Column 6: Conjugation form
    pub l_form: String,     // Column 7: Lexeme form (katakana)
    pub lemma: String,      // Column 8: Lemma
    pub orth: String,       // Column 9: Orthography
    pub pron: String,       // Column 10: Pronunciation
    pub orth_base: String,  // Column 11: Orthography base
    pub pron_base: String,  // Column 12: Pronunciation base
    pub goshu: String,      // Column 13: Word origin
    pub kana: String,       // Column 21: Kana
    pub kana_base: String,  // Column 22: Kana base
    pub a_type: String,     // Column 25: Accent type
}

/// Splits a feature string on commas, honouring double-quoted fields
/// (symbol entries such as `","` are quoted in the lexicon).
fn split_features(features: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = features.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

impl From<&VibratoToken> for RawToken {
    fn from(vt: &VibratoToken) -> Self {
        let fields = split_features(&vt.features);
        let get_field = |idx: usize| fields.get(idx).map_or("*", |f| f.as_str()).to_string();

        RawToken {
            pos1: get_field(0),
            pos2: get_field(1),
            pos3: get_field(2),
            pos4: get_field(3),
            c_type: get_field(4),
            c_form: get_field(5),
            l_form: get_field(6),
            lemma: get_field(7),
            orth: get_field(8),
            pron: get_field(9),
            orth_base: get_field(10),
            pron_base: get_field(11),
            goshu: get_field(12),
            kana: get_field(20),
            kana_base: get_field(21),
            a_type: get_field(24),
        }
    }
}

/// Morpheme record handed to the engines after tagging and correction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub surface: String,
    /// Coarse to fine, e.g. `["名詞", "普通名詞", "サ変可能"]`.
    pub pos_path: Vec<String>,
    /// Conjugation type label (`五段-カ行`, `上一段-ザ行`, `サ行変格`...); empty
    /// for words that do not inflect.
    pub conjugation_type: String,
    pub conjugation_form: String,
    pub lemma: String,
    /// Katakana reading of the lemma.
    pub lemma_reading: String,
    /// Phonemic reading (katakana, long vowels as ー).
    pub reading: String,
    /// Orthographic kana reading (は stays ハ).
    pub kana: String,
}

fn value_or(value: &str, fallback: &str) -> String {
    if value.is_empty() || value == "*" {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn label(value: &str) -> String {
    if value == "*" {
        String::new()
    } else {
        value.to_string()
    }
}

impl From<(String, RawToken)> for Token {
    fn from(item: (String, RawToken)) -> Self {
        let (surface, raw) = item;
        let pos_path = [&raw.pos1, &raw.pos2, &raw.pos3, &raw.pos4]
            .into_iter()
            .filter(|p| !p.is_empty() && p.as_str() != "*")
            .cloned()
            .collect();

        let reading = value_or(&raw.pron, &surface);
        let kana = value_or(&raw.kana, &reading);
        let lemma_reading = value_or(&raw.kana_base, &value_or(&raw.l_form, &surface));

        Token {
            pos_path,
            conjugation_type: label(&raw.c_type),
            conjugation_form: label(&raw.c_form),
            lemma: value_or(&raw.lemma, &surface),
            lemma_reading,
            reading,
            kana,
            surface,
        }
    }
}

impl From<VibratoToken> for Token {
    fn from(vt: VibratoToken) -> Self {
        let raw = RawToken::from(&vt);
        (vt.surface, raw).into()
    }
}

impl Token {
    /// Tag at `level` (0 = coarsest) of the part-of-speech path.
    pub fn pos(&self, level: usize) -> UnidicTag {
        self.pos_path.get(level).map_or(UnidicTag::Unset, |p| p.as_str().into())
    }

    pub fn pos1(&self) -> UnidicTag {
        self.pos(0)
    }

    pub fn pos_label(&self) -> String {
        self.pos_path.join("-")
    }

    pub fn is_verb(&self) -> bool {
        self.pos1() == UnidicTag::Doushi
    }

    pub fn is_adjective(&self) -> bool {
        self.pos1() == UnidicTag::Keiyoushi
    }

    pub fn is_noun(&self) -> bool {
        self.pos1() == UnidicTag::Meishi
    }

    /// Nouns that turn into verbs with a trailing する (勉強, 活動, 心配).
    pub fn is_sa_noun(&self) -> bool {
        self.is_noun()
            && matches!(self.pos(2), UnidicTag::Sahenkanou | UnidicTag::Sahenkeijoushikanou)
    }

    pub fn conjugation_class(&self) -> ConjugationClass {
        ConjugationClass::from(self.conjugation_type.as_str())
    }

    pub fn phonetic(&self) -> PhoneticToken {
        PhoneticToken {
            surface: self.surface.clone(),
            reading: self.reading.clone(),
            kana: self.kana.clone(),
            is_particle_like_suffix: self.is_particle_like_suffix(),
        }
    }

    /// Auxiliary verbs, conjunctive particles and nominal suffixes are read
    /// together with the word before them.
    fn is_particle_like_suffix(&self) -> bool {
        match self.pos1() {
            UnidicTag::Jodoushi => true,
            UnidicTag::Joshi => self.pos(1) == UnidicTag::Setsuzokujoshi,
            UnidicTag::Setsubiji => {
                self.pos(1) == UnidicTag::Meishiteki
                    && self.pos(2) == UnidicTag::Ippan
                    && self.pos_path.len() == 3
            }
            _ => false,
        }
    }
}

/// The slice of a [`Token`] the reading joiner looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticToken {
    pub surface: String,
    pub reading: String,
    pub kana: String,
    pub is_particle_like_suffix: bool,
}

impl PhoneticToken {
    pub fn is_japanese(&self) -> bool {
        self.surface.as_str().is_japanese()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vibrato(surface: &str, features: &str) -> VibratoToken {
        VibratoToken { surface: surface.to_string(), features: features.to_string() }
    }

    #[test]
    fn named_fields_follow_unidic_columns() {
        let vt = vibrato(
            "走り",
            "動詞,一般,*,*,五段-ラ行,連用形-一般,ハシル,走る,走り,ハシリ,走る,ハシル,和,*,*,*,*,*,*,用,ハシリ,ハシル,ハシリ,ハシル,2,C1,*,8048,29265",
        );
        let raw = RawToken::from(&vt);
        assert_eq!(raw.c_type, "五段-ラ行");
        assert_eq!(raw.lemma, "走る");
        assert_eq!(raw.pron, "ハシリ");
        assert_eq!(raw.kana_base, "ハシル");

        let token: Token = vt.into();
        assert_eq!(token.pos_path, vec!["動詞", "一般"]);
        assert_eq!(token.lemma, "走る");
        assert_eq!(token.lemma_reading, "ハシル");
        assert!(token.is_verb());
    }

    #[test]
    fn short_rows_fall_back_to_surface() {
        let token: Token = vibrato("アニー", "名詞,固有名詞,人名,一般,*,*").into();
        assert_eq!(token.lemma, "アニー");
        assert_eq!(token.reading, "アニー");
        assert_eq!(token.kana, "アニー");
        assert_eq!(token.lemma_reading, "アニー");
        assert_eq!(token.conjugation_type, "");
    }

    #[test]
    fn sa_nouns_include_adjectival_ones() {
        let benkyou: Token = vibrato("勉強", "名詞,普通名詞,サ変可能,*").into();
        let shinpai: Token = vibrato("心配", "名詞,普通名詞,サ変形状詞可能,*").into();
        let hon: Token = vibrato("本", "名詞,普通名詞,一般,*").into();
        assert!(benkyou.is_sa_noun());
        assert!(shinpai.is_sa_noun());
        assert!(!hon.is_sa_noun());
    }

    #[test]
    fn quoted_symbol_fields() {
        let fields = split_features(r#"補助記号,読点,*,*,*,*,",",",",",""#);
        assert_eq!(fields[6], ",");
        assert_eq!(fields[7], ",");
        assert_eq!(fields.len(), 9);
    }

    #[test]
    fn particle_like_suffixes() {
        let aux: Token = vibrato("た", "助動詞,*,*,*,助動詞-タ,終止形-一般,タ,た,た,タ,た,タ").into();
        let conj: Token = vibrato("て", "助詞,接続助詞,*,*,*,*,テ,て,て,テ,て,テ").into();
        let case: Token = vibrato("が", "助詞,格助詞,*,*,*,*,ガ,が,が,ガ,が,ガ").into();
        let suffix: Token = vibrato("さん", "接尾辞,名詞的,一般,*,*,*,サン,さん,さん,サン,さん,サン").into();
        assert!(aux.phonetic().is_particle_like_suffix);
        assert!(conj.phonetic().is_particle_like_suffix);
        assert!(!case.phonetic().is_particle_like_suffix);
        assert!(suffix.phonetic().is_particle_like_suffix);
    }
}
