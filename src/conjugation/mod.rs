//! Paradigm generation for verbs and i-adjectives.
//!
//! Input goes through the tokenizer first, so inflected forms (`来て`,
//! `おいしかった`) and compound verbs (`選挙活動する`) resolve to the same
//! paradigm as their dictionary form.

pub mod adjectives;
pub mod class;
pub mod irregular;
pub mod verbs;


use serde::{
    Deserialize,
    Serialize,
};
use tracing::debug;

pub use self::class::{
    shift_grade,
    ConjugationClass,
};
use crate::segmentation::{
    token_models::Token,
    tokenizer::{
        tokenize,
        Tagger,
    },
};

const SURU: &str = "する";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbParadigm {
    pub base: String,
    pub nai: String,
    pub nakatta: String,
    pub masu: String,
    pub te: String,
    pub ta: String,
    pub conditional: String,
    pub imperative: String,
    pub volitional: String,
    /// Missing for honorific verbs that have no potential form.
    pub potential: Option<String>,
}

impl VerbParadigm {
    pub const SLOTS: [&'static str; 10] = [
        "base",
        "nai",
        "nakatta",
        "masu",
        "te",
        "ta",
        "conditional",
        "imperative",
        "volitional",
        "potential",
    ];

    pub fn forms(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.base.as_str()),
            Some(self.nai.as_str()),
            Some(self.nakatta.as_str()),
            Some(self.masu.as_str()),
            Some(self.te.as_str()),
            Some(self.ta.as_str()),
            Some(self.conditional.as_str()),
            Some(self.imperative.as_str()),
            Some(self.volitional.as_str()),
            self.potential.as_deref(),
        ]
    }

    /// The same paradigm with `prefix` written before every form.
    pub fn prefixed(&self, prefix: &str) -> VerbParadigm {
        let join = |form: &str| format!("{prefix}{form}");
        VerbParadigm {
            base: join(&self.base),
            nai: join(&self.nai),
            nakatta: join(&self.nakatta),
            masu: join(&self.masu),
            te: join(&self.te),
            ta: join(&self.ta),
            conditional: join(&self.conditional),
            imperative: join(&self.imperative),
            volitional: join(&self.volitional),
            potential: self.potential.as_deref().map(join),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjectiveParadigm {
    pub base: String,
    pub nai: String,
    pub nakatta: String,
    pub desu: String,
    pub te: String,
    pub ta: String,
    pub conditional: String,
    pub adverbial: String,
}

impl AdjectiveParadigm {
    pub const SLOTS: [&'static str; 8] =
        ["base", "nai", "nakatta", "desu", "te", "ta", "conditional", "adverbial"];

    pub fn forms(&self) -> Vec<Option<&str>> {
        [
            &self.base,
            &self.nai,
            &self.nakatta,
            &self.desu,
            &self.te,
            &self.ta,
            &self.conditional,
            &self.adverbial,
        ]
        .into_iter()
        .map(|form| Some(form.as_str()))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Paradigm {
    Verb(VerbParadigm),
    Adjective(AdjectiveParadigm),
}

impl Paradigm {
    pub fn base(&self) -> &str {
        match self {
            Paradigm::Verb(p) => &p.base,
            Paradigm::Adjective(p) => &p.base,
        }
    }

    /// Forms in slot order; see [`Paradigm::slots`] for the slot names.
    pub fn forms(&self) -> Vec<Option<&str>> {
        match self {
            Paradigm::Verb(p) => p.forms(),
            Paradigm::Adjective(p) => p.forms(),
        }
    }

    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            Paradigm::Verb(_) => &VerbParadigm::SLOTS,
            Paradigm::Adjective(_) => &AdjectiveParadigm::SLOTS,
        }
    }
}

/// Full paradigm of the verb or adjective `input` starts with. Anything that
/// does not inflect, or that the tagger cannot read, gives `None`.
pub fn conjugate(tagger: &dyn Tagger, input: &str) -> Option<Paradigm> {
    match tokenize(tagger, input) {
        Ok(tokens) => conjugate_tokens(&tokens),
        Err(e) => {
            debug!(input, error = %e, "conjugation skipped");
            None
        }
    }
}

pub fn conjugate_tokens(tokens: &[Token]) -> Option<Paradigm> {
    let first = tokens.first()?;

    if first.is_verb() {
        return verbs::verb_paradigm(&first.lemma, first.conjugation_class()).map(Paradigm::Verb);
    }
    if first.is_adjective() {
        // 文語 adjectives (良し) carry their own labels
        return match first.conjugation_class() {
            ConjugationClass::Adjective => {
                adjectives::adjective_paradigm(&first.lemma).map(Paradigm::Adjective)
            }
            _ => None,
        };
    }
    if tokens.len() == 1 || !first.is_sa_noun() {
        return None;
    }

    // 勉強 + する, 選挙 + 活動 + する
    let prefix = match tokens {
        [noun, suru, ..] if suru.lemma == SURU => noun.surface.clone(),
        [noun, second, suru, ..] if second.is_noun() && suru.lemma == SURU => {
            format!("{}{}", noun.surface, second.surface)
        }
        _ => return None,
    };
    let suru = irregular::irregular_paradigm(SURU)?;
    Some(Paradigm::Verb(suru.prefixed(&prefix)))
}
