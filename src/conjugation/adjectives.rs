use super::AdjectiveParadigm;

pub fn adjective_paradigm(lemma: &str) -> Option<AdjectiveParadigm> {
    let (stem, desu) = match lemma {
        // いい inflects on the older よい
        "いい" => ("よ", "いいです".to_string()),
        _ => {
            let stem = lemma.strip_suffix('い')?;
            (stem, format!("{lemma}です"))
        }
    };

    // ない is already a negative
    let (nai, nakatta) = match lemma {
        "ない" => ("ない".to_string(), "なかった".to_string()),
        "無い" => ("無い".to_string(), "無かった".to_string()),
        _ => (format!("{stem}くない"), format!("{stem}くなかった")),
    };

    Some(AdjectiveParadigm {
        base: lemma.to_string(),
        nai,
        nakatta,
        desu,
        te: format!("{stem}くて"),
        ta: format!("{stem}かった"),
        conditional: format!("{stem}ければ"),
        adverbial: format!("{stem}く"),
    })
}
