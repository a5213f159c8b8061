use tracing::debug;

use super::token_models::Token;
use crate::core::utils::KanaExt;

/**
 * Lemma fixes for known UniDic quirks, written as rules instead of one long
 * if/else chain. Rules are tried in order and only the first one whose
 * condition holds is applied to a token.
 */
pub struct CorrectionRule {
    pub name: &'static str,
    pub applies: fn(&Token) -> bool,
    pub correct: fn(&mut Token),
}

const SURU_KANJI_LEMMA: &str = "為る";
const KURU_KANJI_LEMMA: &str = "来る";
const ZURU_SUFFIX: &str = "ずる";
const SA_IRREGULAR: &str = "サ行変格";
const KA_IRREGULAR: &str = "カ行変格";
const UPPER_ICHIDAN_ZA: &str = "上一段-ザ行";

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn zuru_stem(lemma: &str) -> Option<&str> {
    lemma.strip_suffix(ZURU_SUFFIX)
}

pub fn default_corrections() -> Vec<CorrectionRule> {
    vec![
        // The analyzer files every する under its kanji spelling.
        CorrectionRule {
            name: "suru lemma",
            applies: |t| t.lemma == SURU_KANJI_LEMMA && t.conjugation_type == SA_IRREGULAR,
            correct: |t| {
                t.lemma = "する".to_string();
                t.lemma_reading = "スル".to_string();
            },
        },
        // くる written in kana keeps a kana lemma.
        CorrectionRule {
            name: "kuru lemma",
            applies: |t| {
                t.lemma == KURU_KANJI_LEMMA
                    && t.conjugation_type == KA_IRREGULAR
                    && first_char(&t.surface) != Some('来')
            },
            correct: |t| {
                t.lemma = "くる".to_string();
                t.lemma_reading = "クル".to_string();
            },
        },
        // 念じる (上一段) and 念ずる (サ変) share the lemma 念ずる.
        CorrectionRule {
            name: "zuru/jiru verb",
            applies: |t| {
                t.lemma.ends_with(ZURU_SUFFIX)
                    && t.is_verb()
                    && (t.conjugation_type == SA_IRREGULAR || t.conjugation_type == UPPER_ICHIDAN_ZA)
            },
            correct: |t| {
                let Some(stem) = zuru_stem(&t.lemma).map(str::to_string) else {
                    return;
                };
                if t.surface.starts_with(&format!("{stem}じ")) {
                    t.lemma = format!("{stem}じる");
                    t.lemma_reading = t.lemma_reading.replace("ズル", "ジル");
                    t.conjugation_type = UPPER_ICHIDAN_ZA.to_string();
                }
            },
        },
        // Nouns keep their written form (東京 rather than a normalized entry).
        CorrectionRule {
            name: "noun lemma from surface",
            applies: |t| t.is_noun() && t.surface != t.lemma,
            correct: |t| t.lemma = t.surface.clone(),
        },
        // おいしかった should not come back as 美味しい.
        CorrectionRule {
            name: "hiragana lemma",
            applies: |t| t.surface.is_only_hiragana(),
            correct: |t| t.lemma = t.lemma_reading.to_hiragana(),
        },
        // 刺す, 挿す and 指す all come back as 差す-他動詞.
        CorrectionRule {
            name: "allograph lemma",
            applies: |t| {
                t.lemma.contains('-')
                    || (!t.surface.is_empty() && first_char(&t.surface) != first_char(&t.lemma))
            },
            correct: |t| {
                let Some(head) = first_char(&t.surface) else {
                    return;
                };
                let tail: String = t.lemma.chars().skip(1).collect();
                let tail = tail.split('-').next().unwrap_or_default();
                t.lemma = format!("{head}{tail}");
            },
        },
    ]
}

/// Applies the first matching rule and returns its name.
pub fn apply_corrections(token: &mut Token, rules: &[CorrectionRule]) -> Option<&'static str> {
    let rule = rules.iter().find(|rule| (rule.applies)(token))?;
    let before = token.lemma.clone();
    (rule.correct)(token);
    debug!(
        rule = rule.name,
        surface = %token.surface,
        from = %before,
        to = %token.lemma,
        "applied lemma correction"
    );
    Some(rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::token_models::VibratoToken;

    fn token(surface: &str, features: &str) -> Token {
        VibratoToken { surface: surface.to_string(), features: features.to_string() }.into()
    }

    fn corrected(mut token: Token) -> (Token, Option<&'static str>) {
        let rules = default_corrections();
        let applied = apply_corrections(&mut token, &rules);
        (token, applied)
    }

    #[test]
    fn suru_lemma_is_written_in_kana() {
        let t = token(
            "し",
            "動詞,非自立可能,*,*,サ行変格,連用形-一般,スル,為る,し,シ,する,スル,和,*,*,*,*,*,*,用,シ,スル,シ,スル,0,C5,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("suru lemma"));
        assert_eq!(t.lemma, "する");
    }

    #[test]
    fn kuru_lemma_follows_surface_script() {
        let kana = token(
            "き",
            "動詞,非自立可能,*,*,カ行変格,連用形-一般,クル,来る,き,キ,くる,クル,和,*,*,*,*,*,*,用,キ,クル,キ,クル,1,C2,*,1,1",
        );
        let kanji = token(
            "来",
            "動詞,非自立可能,*,*,カ行変格,連用形-一般,クル,来る,来,キ,来る,クル,和,*,*,*,*,*,*,用,キ,クル,キ,クル,1,C2,*,1,1",
        );
        assert_eq!(corrected(kana).0.lemma, "くる");
        let (kanji, applied) = corrected(kanji);
        assert_eq!(kanji.lemma, "来る");
        assert_eq!(applied, None);
    }

    #[test]
    fn zuru_verb_with_ji_surface_becomes_ichidan() {
        let t = token(
            "念じ",
            "動詞,一般,*,*,サ行変格,連用形-一般,ネンズル,念ずる,念じ,ネンジ,念ずる,ネンズル,漢,*,*,*,*,*,*,用,ネンジ,ネンズル,ネンジ,ネンズル,0,C2,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("zuru/jiru verb"));
        assert_eq!(t.lemma, "念じる");
        assert_eq!(t.lemma_reading, "ネンジル");
        assert_eq!(t.conjugation_type, "上一段-ザ行");
    }

    #[test]
    fn zuru_verb_with_zu_surface_is_kept() {
        let t = token(
            "任ずる",
            "動詞,一般,*,*,サ行変格,終止形-一般,ニンズル,任ずる,任ずる,ニンズル,任ずる,ニンズル,漢,*,*,*,*,*,*,用,ニンズル,ニンズル,ニンズル,ニンズル,0,C2,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("zuru/jiru verb"));
        assert_eq!(t.lemma, "任ずる");
        assert_eq!(t.conjugation_type, "サ行変格");
    }

    #[test]
    fn noun_lemma_uses_surface() {
        let t = token("アニー", "名詞,固有名詞,人名,一般,*,*,アニー,アニー-外国,アニー,アニー,アニー,アニー,外");
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("noun lemma from surface"));
        assert_eq!(t.lemma, "アニー");
    }

    #[test]
    fn hiragana_surface_gets_kana_lemma() {
        let t = token(
            "おいしかっ",
            "形容詞,一般,*,*,形容詞,連用形-促音便,オイシイ,美味しい,おいしかっ,オイシカッ,おいしい,オイシー,和,*,*,*,*,*,*,相,オイシカッ,オイシイ,オイシカッ,オイシイ,0,C3,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("hiragana lemma"));
        assert_eq!(t.lemma, "おいしい");
    }

    #[test]
    fn allograph_lemma_takes_surface_head() {
        let t = token(
            "指し",
            "動詞,一般,*,*,五段-サ行,連用形-一般,サス,差す-他動詞,指し,サシ,指す,サス,和,*,*,*,*,*,*,用,サシ,サス,サシ,サス,1,C1,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("allograph lemma"));
        assert_eq!(t.lemma, "指す");
    }

    #[test]
    fn only_one_rule_applies() {
        // a noun whose lemma carries an annotation is handled by the noun rule alone
        let t = token("東京", "名詞,固有名詞,地名,一般,*,*,トウキョウ,トウキョウ-東京,東京,トーキョー,東京,トーキョー,固");
        let (t, applied) = corrected(t);
        assert_eq!(applied, Some("noun lemma from surface"));
        assert_eq!(t.lemma, "東京");
    }

    #[test]
    fn ordinary_verb_is_untouched() {
        let t = token(
            "食べ",
            "動詞,一般,*,*,下一段-バ行,連用形-一般,タベル,食べる,食べ,タベ,食べる,タベル,和,*,*,*,*,*,*,用,タベ,タベル,タベ,タベル,2,C1,*,1,1",
        );
        let (t, applied) = corrected(t);
        assert_eq!(applied, None);
        assert_eq!(t.lemma, "食べる");
    }
}
