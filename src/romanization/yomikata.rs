use serde::{
    Deserialize,
    Serialize,
};

use super::romaji::{
    romanize_kana_with,
    RomanizeOptions,
};
use crate::{
    core::{
        utils::KanaExt,
        NozomiError,
    },
    segmentation::{
        token_models::Token,
        tokenizer::{
            tokenize,
            Tagger,
        },
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingScript {
    #[default]
    Katakana,
    Hiragana,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    /// As pronounced: は → ワ, long vowels as ー.
    #[default]
    Phonemic,
    /// As spelled in kana: は → ハ.
    Orthographic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YomikataOptions {
    pub script: ReadingScript,
    pub separator: String,
    pub kind: ReadingKind,
}

/// Groups token readings into prosodic words. Auxiliaries, conjunctive
/// particles and nominal suffixes are read with the word before them.
pub fn reading_words(tokens: &[Token], kind: ReadingKind) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();

    for token in tokens.iter().map(Token::phonetic) {
        let reading = if !token.is_japanese() {
            token.surface
        } else {
            match kind {
                ReadingKind::Phonemic => token.reading,
                ReadingKind::Orthographic => token.kana,
            }
        };

        if token.is_particle_like_suffix {
            if let Some(last) = words.last_mut() {
                last.push_str(&reading);
                continue;
            }
        }
        words.push(reading);
    }
    words
}

pub fn yomikata_words(
    tagger: &dyn Tagger,
    text: &str,
    options: &YomikataOptions,
) -> Result<Vec<String>, NozomiError> {
    let tokens = tokenize(tagger, text)?;
    let words = reading_words(&tokens, options.kind);
    Ok(match options.script {
        ReadingScript::Katakana => words,
        ReadingScript::Hiragana => words.iter().map(|w| w.to_hiragana()).collect(),
    })
}

pub fn yomikata(
    tagger: &dyn Tagger,
    text: &str,
    options: &YomikataOptions,
) -> Result<String, NozomiError> {
    Ok(yomikata_words(tagger, text, options)?.join(&options.separator))
}

pub fn romanize_with(
    tagger: &dyn Tagger,
    text: &str,
    options: RomanizeOptions,
) -> Result<String, NozomiError> {
    let kind = if options.phonemic { ReadingKind::Phonemic } else { ReadingKind::Orthographic };
    let reading = yomikata(tagger, text, &YomikataOptions {
        script: ReadingScript::Katakana,
        separator: " ".to_string(),
        kind,
    })?;
    Ok(romanize_kana_with(&reading, options))
}

pub fn romanize(tagger: &dyn Tagger, text: &str) -> Result<String, NozomiError> {
    romanize_with(tagger, text, RomanizeOptions::default())
}
