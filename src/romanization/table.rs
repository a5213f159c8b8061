use std::{
    collections::HashMap,
    sync::LazyLock,
};

use crate::core::{
    utils::KanaExt,
    NozomiError,
};

const ROMAJI_JSON: &str = include_str!("../data/romaji.json");

pub static ROMAJI: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| parse_romaji_table(ROMAJI_JSON).expect("embedded romaji table is valid"));

/// Parses a katakana mora → romaji table. Keys must be one katakana, or a
/// katakana followed by one small kana.
pub fn parse_romaji_table(json: &str) -> Result<HashMap<String, String>, NozomiError> {
    let table: HashMap<String, String> = serde_json::from_str(json)
        .map_err(|e| NozomiError::InvalidData(format!("romaji table: {e}")))?;

    for (mora, romaji) in &table {
        let len = mora.chars().count();
        if !(1..=2).contains(&len) || !mora.is_only_kana() || mora.to_katakana() != *mora {
            return Err(NozomiError::InvalidData(format!("romaji table: bad mora {mora:?}")));
        }
        if romaji.is_empty() {
            return Err(NozomiError::InvalidData(format!("romaji table: {mora} has no romaji")));
        }
    }
    Ok(table)
}

pub fn lookup(mora: &str) -> Option<&'static str> {
    ROMAJI.get(mora).map(String::as_str)
}
