//! Canned tagger output for tests that must not depend on a downloaded
//! dictionary. Rows follow the 29-column UniDic layout vibrato emits.

use std::collections::HashMap;

use crate::{
    core::NozomiError,
    segmentation::{
        token_models::VibratoToken,
        tokenizer::Tagger,
    },
};

/// One morpheme: surface, four POS levels, conjugation type and form, then
/// lForm, lemma, pron, kana, kanaBase.
type Morpheme = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const NOUN: &str = "名詞,普通名詞,一般,*";
const SA_NOUN: &str = "名詞,普通名詞,サ変可能,*";
const NO_CONJ: &str = "*,*";

fn row(m: Morpheme) -> VibratoToken {
    let (surface, pos, conj, l_form, lemma, pron, kana, kana_base) = m;
    let features = format!(
        "{pos},{conj},{l_form},{lemma},{surface},{pron},{lemma},{kana_base},和,*,*,*,*,*,*,体,{kana},{kana_base},{kana},{kana_base},0,C2,*,0,0"
    );
    VibratoToken { surface: surface.to_string(), features }
}

fn suru() -> Morpheme {
    ("する", "動詞,非自立可能,*,*", "サ行変格,終止形-一般", "スル", "為る", "スル", "スル", "スル")
}

fn ta() -> Morpheme {
    ("た", "助動詞,*,*,*", "助動詞-タ,終止形-一般", "タ", "た", "タ", "タ", "タ")
}

fn te() -> Morpheme {
    ("て", "助詞,接続助詞,*,*", NO_CONJ, "テ", "て", "テ", "テ", "テ")
}

fn fixtures() -> Vec<(&'static str, Vec<Morpheme>)> {
    vec![
        (
            "0度から1度まで",
            vec![
                ("0", "名詞,数詞,*,*", NO_CONJ, "ゼロ", "零", "ゼロ", "ゼロ", "ゼロ"),
                ("度", "名詞,普通名詞,助数詞可能,*", NO_CONJ, "ド", "度", "ド", "ド", "ド"),
                ("から", "助詞,格助詞,*,*", NO_CONJ, "カラ", "から", "カラ", "カラ", "カラ"),
                ("1", "名詞,数詞,*,*", NO_CONJ, "イチ", "一", "イチ", "イチ", "イチ"),
                ("度", "名詞,普通名詞,助数詞可能,*", NO_CONJ, "ド", "度", "ド", "ド", "ド"),
                ("まで", "助詞,副助詞,*,*", NO_CONJ, "マデ", "まで", "マデ", "マデ", "マデ"),
            ],
        ),
        (
            "勉強する",
            vec![
                ("勉強", SA_NOUN, NO_CONJ, "ベンキョウ", "勉強", "ベンキョー", "ベンキョウ", "ベンキョウ"),
                suru(),
            ],
        ),
        (
            "選挙活動する",
            vec![
                ("選挙", SA_NOUN, NO_CONJ, "センキョ", "選挙", "センキョ", "センキョ", "センキョ"),
                ("活動", SA_NOUN, NO_CONJ, "カツドウ", "活動", "カツドー", "カツドウ", "カツドウ"),
                suru(),
            ],
        ),
        (
            "心配する",
            vec![
                (
                    "心配",
                    "名詞,普通名詞,サ変形状詞可能,*",
                    NO_CONJ,
                    "シンパイ",
                    "心配",
                    "シンパイ",
                    "シンパイ",
                    "シンパイ",
                ),
                suru(),
            ],
        ),
        ("学校する", vec![("学校", NOUN, NO_CONJ, "ガッコウ", "学校", "ガッコー", "ガッコウ", "ガッコウ"), suru()]),
        ("する", vec![suru()]),
        (
            "食べる",
            vec![(
                "食べる",
                "動詞,一般,*,*",
                "下一段-バ行,終止形-一般",
                "タベル",
                "食べる",
                "タベル",
                "タベル",
                "タベル",
            )],
        ),
        (
            "書く",
            vec![("書く", "動詞,一般,*,*", "五段-カ行,終止形-一般", "カク", "書く", "カク", "カク", "カク")],
        ),
        (
            "行く",
            vec![(
                "行く",
                "動詞,非自立可能,*,*",
                "五段-カ行,終止形-一般",
                "イク",
                "行く",
                "イク",
                "イク",
                "イク",
            )],
        ),
        (
            "話した",
            vec![
                ("話し", "動詞,一般,*,*", "五段-サ行,連用形-一般", "ハナス", "話す", "ハナシ", "ハナシ", "ハナス"),
                ta(),
            ],
        ),
        (
            "いい",
            vec![("いい", "形容詞,非自立可能,*,*", "形容詞,終止形-一般", "ヨイ", "良い", "イー", "イイ", "イイ")],
        ),
        (
            "大きい",
            vec![(
                "大きい",
                "形容詞,一般,*,*",
                "形容詞,終止形-一般",
                "オオキイ",
                "大きい",
                "オーキー",
                "オオキイ",
                "オオキイ",
            )],
        ),
        (
            "おいしかった",
            vec![
                (
                    "おいしかっ",
                    "形容詞,一般,*,*",
                    "形容詞,連用形-促音便",
                    "オイシイ",
                    "美味しい",
                    "オイシカッ",
                    "オイシカッ",
                    "オイシイ",
                ),
                ta(),
            ],
        ),
        (
            "任ずる",
            vec![(
                "任ずる",
                "動詞,一般,*,*",
                "サ行変格,終止形-一般",
                "ニンズル",
                "任ずる",
                "ニンズル",
                "ニンズル",
                "ニンズル",
            )],
        ),
        (
            "念じた",
            vec![
                ("念じ", "動詞,一般,*,*", "サ行変格,連用形-一般", "ネンズル", "念ずる", "ネンジ", "ネンジ", "ネンズル"),
                ta(),
            ],
        ),
        (
            "来て",
            vec![
                ("来", "動詞,非自立可能,*,*", "カ行変格,連用形-一般", "クル", "来る", "キ", "キ", "クル"),
                te(),
            ],
        ),
        (
            "きた",
            vec![
                ("き", "動詞,非自立可能,*,*", "カ行変格,連用形-一般", "クル", "来る", "キ", "キ", "クル"),
                ta(),
            ],
        ),
        (
            "走って",
            vec![
                ("走っ", "動詞,一般,*,*", "五段-ラ行,連用形-促音便", "ハシル", "走る", "ハシッ", "ハシッ", "ハシル"),
                te(),
            ],
        ),
        (
            "東京",
            vec![(
                "東京",
                "名詞,固有名詞,地名,一般",
                NO_CONJ,
                "トウキョウ",
                "東京",
                "トーキョー",
                "トウキョウ",
                "トウキョウ",
            )],
        ),
        ("伊藤", vec![("伊藤", "名詞,固有名詞,人名,姓", NO_CONJ, "イトウ", "伊藤", "イトー", "イトウ", "イトウ")]),
        ("一緒", vec![("一緒", NOUN, NO_CONJ, "イッショ", "一緒", "イッショ", "イッショ", "イッショ")]),
        ("一兆", vec![("一兆", "名詞,数詞,*,*", NO_CONJ, "イッチョウ", "一兆", "イッチョー", "イッチョウ", "イッチョウ")]),
        ("新聞", vec![("新聞", NOUN, NO_CONJ, "シンブン", "新聞", "シンブン", "シンブン", "シンブン")]),
        ("あっ", vec![("あっ", "感動詞,一般,*,*", NO_CONJ, "アッ", "あっ", "アッ", "アッ", "アッ")]),
        (
            "私は本をNHKへ返す",
            vec![
                ("私", "代名詞,*,*,*", NO_CONJ, "ワタクシ", "私", "ワタシ", "ワタシ", "ワタシ"),
                ("は", "助詞,係助詞,*,*", NO_CONJ, "ハ", "は", "ワ", "ハ", "ハ"),
                ("本", NOUN, NO_CONJ, "ホン", "本", "ホン", "ホン", "ホン"),
                ("を", "助詞,格助詞,*,*", NO_CONJ, "ヲ", "を", "オ", "ヲ", "ヲ"),
                (
                    "NHK",
                    "名詞,固有名詞,一般,*",
                    NO_CONJ,
                    "エヌエッチケー",
                    "NHK",
                    "エヌエッチケー",
                    "エヌエッチケー",
                    "エヌエッチケー",
                ),
                ("へ", "助詞,格助詞,*,*", NO_CONJ, "ヘ", "へ", "エ", "ヘ", "ヘ"),
                ("返す", "動詞,一般,*,*", "五段-サ行,終止形-一般", "カエス", "返す", "カエス", "カエス", "カエス"),
            ],
        ),
        (
            "大きい家は走りたくなるな",
            vec![
                (
                    "大きい",
                    "形容詞,一般,*,*",
                    "形容詞,連体形-一般",
                    "オオキイ",
                    "大きい",
                    "オーキー",
                    "オオキイ",
                    "オオキイ",
                ),
                ("家", NOUN, NO_CONJ, "イエ", "家", "イエ", "イエ", "イエ"),
                ("は", "助詞,係助詞,*,*", NO_CONJ, "ハ", "は", "ワ", "ハ", "ハ"),
                ("走り", "動詞,一般,*,*", "五段-ラ行,連用形-一般", "ハシル", "走る", "ハシリ", "ハシリ", "ハシル"),
                ("たく", "助動詞,*,*,*", "助動詞-タイ,連用形-一般", "タイ", "たい", "タク", "タク", "タイ"),
                ("なる", "動詞,非自立可能,*,*", "五段-ラ行,終止形-一般", "ナル", "成る", "ナル", "ナル", "ナル"),
                ("な", "助詞,終助詞,*,*", NO_CONJ, "ナ", "な", "ナ", "ナ", "ナ"),
            ],
        ),
    ]
}

/// Tagger answering only the sentences above. The empty string gives an
/// empty analysis; any other text is an error.
pub struct FixtureTagger {
    sentences: HashMap<&'static str, Vec<VibratoToken>>,
}

impl FixtureTagger {
    pub fn new() -> Self {
        let sentences = fixtures()
            .into_iter()
            .map(|(text, morphemes)| (text, morphemes.into_iter().map(row).collect()))
            .collect();
        Self { sentences }
    }
}

impl Tagger for FixtureTagger {
    fn analyze(&self, text: &str) -> Result<Vec<VibratoToken>, NozomiError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.sentences
            .get(text)
            .cloned()
            .ok_or_else(|| NozomiError::Custom(format!("no fixture for {text:?}")))
    }
}
