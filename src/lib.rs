//! Japanese conjugation tables, readings and romanization on top of the
//! vibrato/UniDic tagger.
//!
//! [`Nozomi`] bundles a tagger with reading preferences; the engines are also
//! usable directly through [`conjugation`] and [`romanization`] with any
//! [`Tagger`].

pub mod conjugation;
pub mod core;
pub mod dictionary;
pub mod persistence;
pub mod romanization;
pub mod segmentation;

#[cfg(test)]
pub mod test_utils;

use rayon::prelude::*;

pub use crate::{
    conjugation::{
        AdjectiveParadigm,
        ConjugationClass,
        Paradigm,
        VerbParadigm,
    },
    core::{
        NozomiError,
        Settings,
    },
    dictionary::DictType,
    romanization::{
        RomanizeOptions,
        YomikataOptions,
    },
    segmentation::{
        Tagger,
        Token,
        VibratoTagger,
    },
};

pub struct Nozomi {
    tagger: Box<dyn Tagger>,
    reading: YomikataOptions,
    romanize: RomanizeOptions,
}

impl Nozomi {
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        Self {
            tagger,
            reading: YomikataOptions::default(),
            romanize: RomanizeOptions::default(),
        }
    }

    /// Builds the vibrato tagger named by `settings` and adopts its reading
    /// preferences.
    pub fn from_settings(
        settings: &Settings,
        progress_callback: Option<Box<dyn Fn(String) + Send>>,
    ) -> Result<Self, NozomiError> {
        let tagger = VibratoTagger::from_settings(settings, progress_callback)?;
        Ok(Self::new(Box::new(tagger))
            .with_reading(settings.reading.clone())
            .with_romanize(settings.romanize_options()))
    }

    pub fn with_reading(mut self, reading: YomikataOptions) -> Self {
        self.reading = reading;
        self
    }

    pub fn with_romanize(mut self, romanize: RomanizeOptions) -> Self {
        self.romanize = romanize;
        self
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, NozomiError> {
        segmentation::tokenize(self.tagger(), text)
    }

    pub fn conjugate(&self, word: &str) -> Option<Paradigm> {
        conjugation::conjugate(self.tagger(), word)
    }

    pub fn yomikata(&self, text: &str) -> Result<String, NozomiError> {
        romanization::yomikata(self.tagger(), text, &self.reading)
    }

    pub fn yomikata_words(&self, text: &str) -> Result<Vec<String>, NozomiError> {
        romanization::yomikata_words(self.tagger(), text, &self.reading)
    }

    pub fn romanize(&self, text: &str) -> Result<String, NozomiError> {
        romanization::romanize_with(self.tagger(), text, self.romanize)
    }

    /// Conjugates every word in parallel; results keep the input order.
    pub fn conjugate_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Option<Paradigm>> {
        words.par_iter().map(|word| self.conjugate(word.as_ref())).collect()
    }

    pub fn romanize_all<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
    ) -> Vec<Result<String, NozomiError>> {
        texts.par_iter().map(|text| self.romanize(text.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        romanization::{
            ReadingKind,
            ReadingScript,
        },
        test_utils::FixtureTagger,
    };

    fn nozomi() -> Nozomi {
        Nozomi::new(Box::new(FixtureTagger::new()))
    }

    #[test]
    fn batch_results_keep_input_order() {
        let words = ["食べる", "東京", "書く", "未登録", "いい"];
        let results = nozomi().conjugate_all(&words);
        let bases: Vec<Option<&str>> =
            results.iter().map(|p| p.as_ref().map(Paradigm::base)).collect();
        assert_eq!(bases, vec![Some("食べる"), None, Some("書く"), None, Some("いい")]);
    }

    #[test]
    fn batch_romanization_reports_failures_per_item() {
        let texts = vec!["伊藤".to_string(), "未登録".to_string(), "新聞".to_string()];
        let results = nozomi().romanize_all(&texts);
        assert_eq!(results[0].as_deref().ok(), Some("itoo"));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref().ok(), Some("shimbun"));
    }

    #[test]
    fn reading_preferences_apply() {
        let nozomi = nozomi()
            .with_reading(YomikataOptions {
                script: ReadingScript::Hiragana,
                separator: "/".to_string(),
                kind: ReadingKind::Orthographic,
            })
            .with_romanize(RomanizeOptions { phonemic: false });
        assert_eq!(nozomi.yomikata("私は本をNHKへ返す").unwrap(), "わたし/は/ほん/を/NHK/へ/かえす");
        assert_eq!(nozomi.romanize("伊藤").unwrap(), "itou");
    }

    #[test]
    fn ipadic_is_rejected() {
        let settings = Settings { dict_type: DictType::Ipadic, ..Settings::default() };
        assert!(matches!(
            Nozomi::from_settings(&settings, None),
            Err(NozomiError::Config(_))
        ));
    }
}
