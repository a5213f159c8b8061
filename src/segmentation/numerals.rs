//! Numeral protection around the tagger.
//!
//! UniDic splits numerals on commas and decimal points (`5,000` comes back as
//! `5` `,` `000`). Every numeral is swapped for its index (`0`, `1`, ...)
//! before tagging and the numeral text is put back on the matching tokens
//! afterwards, in order of first occurrence.

use std::sync::LazyLock;

use regex::{
    Captures,
    Regex,
};
use tracing::debug;

use super::token_models::Token;

static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\d[\d,]*(?:\.\d+)?").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pub text: String,
    pub numerals: Vec<String>,
}

pub fn protect_numerals(text: &str) -> ProtectedText {
    let mut numerals = Vec::new();
    let text = NUMERAL
        .replace_all(text, |caps: &Captures| {
            let placeholder = numerals.len().to_string();
            numerals.push(caps[0].to_string());
            placeholder
        })
        .into_owned();

    ProtectedText { text, numerals }
}

fn is_placeholder_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn numeral_token(template: &Token, numeral: &str) -> Token {
    Token {
        surface: numeral.to_string(),
        pos_path: template.pos_path.clone(),
        conjugation_type: String::new(),
        conjugation_form: String::new(),
        lemma: numeral.to_string(),
        lemma_reading: numeral.to_string(),
        reading: numeral.to_string(),
        kana: numeral.to_string(),
    }
}

/// Splits a run of digit tokens into consecutive placeholders starting at
/// `next`. Returns how many placeholders the run holds, or `None` when the
/// run is not made of placeholders exactly.
fn match_placeholders(run: &str, next: usize, available: usize) -> Option<usize> {
    let mut rest = run;
    let mut index = next;
    while !rest.is_empty() {
        if index >= available {
            return None;
        }
        rest = rest.strip_prefix(index.to_string().as_str())?;
        index += 1;
    }
    Some(index - next)
}

fn flush_run(run: &mut Vec<Token>, restored: &mut Vec<Token>, next: &mut usize, numerals: &[String]) {
    if run.is_empty() {
        return;
    }
    let digits: String = run.iter().map(|t| t.surface.as_str()).collect();
    match match_placeholders(&digits, *next, numerals.len()) {
        Some(count) => {
            for numeral in &numerals[*next..*next + count] {
                debug!(numeral = %numeral, "restored protected numeral");
                restored.push(numeral_token(&run[0], numeral));
            }
            *next += count;
            run.clear();
        }
        None => restored.append(run),
    }
}

pub fn restore_numerals(tokens: Vec<Token>, numerals: &[String]) -> Vec<Token> {
    if numerals.is_empty() {
        return tokens;
    }

    let mut restored = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token> = Vec::new();
    let mut next = 0;

    for token in tokens {
        if is_placeholder_digits(&token.surface) {
            run.push(token);
            continue;
        }
        flush_run(&mut run, &mut restored, &mut next, numerals);
        restored.push(token);
    }
    flush_run(&mut run, &mut restored, &mut next, numerals);

    restored
}
