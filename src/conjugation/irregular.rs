use std::{
    collections::HashMap,
    sync::LazyLock,
};

use super::VerbParadigm;
use crate::core::NozomiError;

const IRREGULAR_VERBS_JSON: &str = include_str!("../data/irregular_verbs.json");

static IRREGULAR_VERBS: LazyLock<HashMap<String, VerbParadigm>> = LazyLock::new(|| {
    parse_irregular_table(IRREGULAR_VERBS_JSON).expect("embedded irregular verb table is valid")
});

/// Parses a lemma → paradigm table and checks that every required slot is
/// filled. Only `potential` may be absent.
pub fn parse_irregular_table(json: &str) -> Result<HashMap<String, VerbParadigm>, NozomiError> {
    let table: HashMap<String, VerbParadigm> = serde_json::from_str(json)
        .map_err(|e| NozomiError::InvalidData(format!("irregular verb table: {e}")))?;

    for (lemma, paradigm) in &table {
        if paradigm.forms().iter().take(9).any(|form| form.map_or(true, str::is_empty)) {
            return Err(NozomiError::InvalidData(format!(
                "irregular verb table: {lemma} has an empty form"
            )));
        }
    }
    Ok(table)
}

pub fn irregular_paradigm(lemma: &str) -> Option<&'static VerbParadigm> {
    IRREGULAR_VERBS.get(lemma)
}

pub fn irregular_lemmas() -> impl Iterator<Item = &'static str> {
    IRREGULAR_VERBS.keys().map(String::as_str)
}
