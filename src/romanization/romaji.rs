//! Katakana → romaji.
//!
//! Lookup runs mora by mora. A small ッ cannot be spelled until the consonant
//! after it is known, so it is written as a private-use marker and resolved
//! by the regex passes once the whole reading has been looked up.

use std::sync::LazyLock;

use regex::Regex;

use super::table::lookup;
use crate::core::utils::KanaExt;

const SMALL_KANA: [char; 11] = ['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ヵ', 'ヶ', 'ャ', 'ュ', 'ョ', 'ヮ'];
const SOKUON: char = 'ッ';
const CHOONPU: char = 'ー';
const GEMINATION_MARK: char = '\u{E000}';
const GLOTTAL_STOP: &str = "ʔ";

static GEMINATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{E000}+ ?(\w)").unwrap());
static LEFTOVER_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{E000}+").unwrap());
static BILABIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new("n([mbp])").unwrap());
static FINAL_OU: LazyLock<Regex> = LazyLock::new(|| Regex::new("o ?u$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanizeOptions {
    /// Apply sandhi: ん before m/b/p, word-final ou → oo and cch → tch.
    pub phonemic: bool,
}

impl Default for RomanizeOptions {
    fn default() -> Self {
        Self { phonemic: true }
    }
}

fn push_mora(out: &mut String, c: char) {
    let mut buf = [0; 4];
    match lookup(c.encode_utf8(&mut buf)) {
        Some(romaji) => out.push_str(romaji),
        None => out.push(c),
    }
}

/// First pass: table lookup, with every ッ left as a marker.
fn spell_morae(reading: &str) -> String {
    let chars: Vec<char> = reading.chars().collect();
    let mut out = String::with_capacity(reading.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(&small) = chars.get(i + 1).filter(|next| SMALL_KANA.contains(next)) {
            let digraph: String = [c, small].iter().collect();
            match lookup(&digraph) {
                Some(romaji) => out.push_str(romaji),
                None => {
                    push_mora(&mut out, c);
                    push_mora(&mut out, small);
                }
            }
            i += 2;
            continue;
        }

        match c {
            SOKUON => out.push(GEMINATION_MARK),
            CHOONPU => match out.chars().last() {
                Some(prev) => out.push(prev),
                None => out.push(c),
            },
            _ => push_mora(&mut out, c),
        }
        i += 1;
    }
    out
}

fn resolve_gemination(romaji: &str) -> String {
    let doubled = GEMINATE.replace_all(romaji, "${1}${1}");
    LEFTOVER_MARK.replace_all(&doubled, GLOTTAL_STOP).into_owned()
}

fn apply_sandhi(romaji: &str) -> String {
    let romaji = BILABIAL.replace_all(romaji, "m${1}");
    let romaji = FINAL_OU.replace(&romaji, "oo");
    romaji.replace("cch", "tch")
}

/// Romanizes a kana reading. Hiragana is accepted and read as katakana;
/// anything outside the table is copied through.
pub fn romanize_kana_with(reading: &str, options: RomanizeOptions) -> String {
    let spelled = spell_morae(&reading.to_katakana());
    let romaji = resolve_gemination(&spelled);
    if options.phonemic {
        apply_sandhi(&romaji)
    } else {
        romaji
    }
}

pub fn romanize_kana(reading: &str) -> String {
    romanize_kana_with(reading, RomanizeOptions::default())
}
