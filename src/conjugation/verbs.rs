use super::{
    class::{
        shift_grade,
        ConjugationClass,
    },
    irregular::irregular_paradigm,
    VerbParadigm,
};

const ZURU: &str = "ずる";
const SURU: &str = "する";

fn split_last(lemma: &str) -> Option<(&str, char)> {
    let last = lemma.chars().last()?;
    Some((&lemma[..lemma.len() - last.len_utf8()], last))
}

/// Te-form of a godan verb, following the euphonic change of its last kana.
pub fn te_form(lemma: &str) -> Option<String> {
    // 行く keeps the っ of the other く-verbs' past tense: 行って, not 行いて
    if let Some(stem) = lemma.strip_suffix("行く") {
        return Some(format!("{stem}行って"));
    }
    if lemma == "いく" {
        return Some("いって".to_string());
    }

    let (stem, last) = split_last(lemma)?;
    let ending = match last {
        'う' | 'つ' | 'る' => "って",
        'ぬ' | 'む' | 'ぶ' => "んで",
        'く' => "いて",
        'ぐ' => "いで",
        'す' => "して",
        _ => return None,
    };
    Some(format!("{stem}{ending}"))
}

pub fn ta_form(te: &str) -> Option<String> {
    if let Some(stem) = te.strip_suffix('て') {
        return Some(format!("{stem}た"));
    }
    te.strip_suffix('で').map(|stem| format!("{stem}だ"))
}

pub fn godan(lemma: &str, row: char) -> Option<VerbParadigm> {
    let (stem, _) = split_last(lemma)?;
    let grade = |n: u32| shift_grade(row, n).map(|kana| format!("{stem}{kana}"));

    let negative = grade(0)?;
    let e_grade = grade(3)?;
    let te = te_form(lemma)?;
    Some(VerbParadigm {
        base: lemma.to_string(),
        nai: format!("{negative}ない"),
        nakatta: format!("{negative}なかった"),
        masu: format!("{}ます", grade(1)?),
        ta: ta_form(&te)?,
        te,
        conditional: format!("{e_grade}ば"),
        imperative: e_grade.clone(),
        volitional: format!("{}う", grade(4)?),
        potential: Some(format!("{e_grade}る")),
    })
}

pub fn ichidan(lemma: &str) -> Option<VerbParadigm> {
    let stem = lemma.strip_suffix('る')?;
    Some(VerbParadigm {
        base: lemma.to_string(),
        nai: format!("{stem}ない"),
        nakatta: format!("{stem}なかった"),
        masu: format!("{stem}ます"),
        te: format!("{stem}て"),
        ta: format!("{stem}た"),
        conditional: format!("{stem}れば"),
        imperative: format!("{stem}ろ"),
        volitional: format!("{stem}よう"),
        potential: Some(format!("{stem}られる")),
    })
}

/// サ変 verbs in ずる (任ずる). Every form but the conditional is built on じ.
pub fn zuru(lemma: &str) -> Option<VerbParadigm> {
    let stem = lemma.strip_suffix(ZURU)?;
    Some(VerbParadigm {
        base: lemma.to_string(),
        nai: format!("{stem}じない"),
        nakatta: format!("{stem}じなかった"),
        masu: format!("{stem}じます"),
        te: format!("{stem}じて"),
        ta: format!("{stem}じた"),
        conditional: format!("{stem}ずれば"),
        imperative: format!("{stem}じよ"),
        volitional: format!("{stem}じよう"),
        potential: Some(format!("{stem}じられる")),
    })
}

/// Single-token サ変 verbs such as 愛する or 座する.
pub fn suru_compound(lemma: &str) -> Option<VerbParadigm> {
    let stem = lemma.strip_suffix(SURU).filter(|stem| !stem.is_empty())?;
    let suru = irregular_paradigm(SURU)?;
    let mut paradigm = suru.prefixed(stem);
    paradigm.potential = Some(format!("{stem}せる"));
    Some(paradigm)
}

/// カ変 verbs written with a prefix (持って来る, やってくる).
fn kuru_compound(lemma: &str) -> Option<VerbParadigm> {
    ["来る", "くる"].into_iter().find_map(|kuru| {
        let prefix = lemma.strip_suffix(kuru)?;
        Some(irregular_paradigm(kuru)?.prefixed(prefix))
    })
}

pub fn verb_paradigm(lemma: &str, class: ConjugationClass) -> Option<VerbParadigm> {
    if let Some(paradigm) = irregular_paradigm(lemma) {
        return Some(paradigm.clone());
    }

    match class {
        ConjugationClass::Suru if lemma.ends_with(ZURU) => zuru(lemma),
        ConjugationClass::Ichidan => ichidan(lemma),
        ConjugationClass::Godan { row } => godan(lemma, row),
        ConjugationClass::Suru if lemma.chars().count() >= 3 => suru_compound(lemma),
        ConjugationClass::Kuru => kuru_compound(lemma),
        _ => None,
    }
}
