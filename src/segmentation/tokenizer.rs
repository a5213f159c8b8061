use std::{
    path::PathBuf,
    sync::LazyLock,
};

use regex::Regex;
use tracing::{
    debug,
    trace,
};
use vibrato::{
    Dictionary,
    Tokenizer,
};

use super::{
    corrections::{
        apply_corrections,
        default_corrections,
        CorrectionRule,
    },
    numerals::{
        protect_numerals,
        restore_numerals,
    },
    token_models::{
        Token,
        VibratoToken,
    },
};
use crate::{
    core::{
        NozomiError,
        Settings,
    },
    dictionary::token_dictionary::{
        ensure_dictionary,
        load_dictionary,
        DictType,
    },
};

/// Morphological analyzer producing raw UniDic rows.
pub trait Tagger: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<VibratoToken>, NozomiError>;
}

pub struct VibratoTagger {
    tokenizer: Tokenizer,
}

impl VibratoTagger {
    pub fn new(dict: Dictionary) -> Self {
        Self { tokenizer: Tokenizer::new(dict) }
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, NozomiError> {
        Ok(Self::new(load_dictionary(path)?))
    }

    /// Loads the dictionary named by `settings`, downloading it first when no
    /// explicit path is configured.
    pub fn from_settings(
        settings: &Settings,
        progress_callback: Option<Box<dyn Fn(String) + Send>>,
    ) -> Result<Self, NozomiError> {
        if settings.dict_type == DictType::Ipadic {
            return Err(NozomiError::Config(
                "IPADIC feature rows are not supported, switch dict_type to unidic".to_string(),
            ));
        }

        let path: PathBuf = match &settings.dictionary_path {
            Some(path) => path.clone(),
            None => ensure_dictionary(&settings.dict_type, progress_callback)?,
        };
        debug!(path = %path.display(), "loading tokenizer dictionary");
        Self::from_path(&path)
    }
}

impl Tagger for VibratoTagger {
    fn analyze(&self, text: &str) -> Result<Vec<VibratoToken>, NozomiError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        Ok(worker.token_iter().map(VibratoToken::from).collect())
    }
}

static DOUBLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new("[“”„]").unwrap());
static SINGLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new("[‘’`]").unwrap());
static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}\u{3000}\u{2002}-\u{200A}]+").unwrap());
static INVISIBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\u{200B}\u{FEFF}]+").unwrap());

/// Normalizes quotes and whitespace before the text reaches the tagger.
pub fn clean_text(text: &str) -> String {
    let text = DOUBLE_QUOTES.replace_all(text, "\"");
    let text = SINGLE_QUOTES.replace_all(&text, "'");
    let text = SPACES.replace_all(&text, " ");
    let text = INVISIBLE.replace_all(&text, "");
    text.trim().to_string()
}

pub fn tokenize(tagger: &dyn Tagger, text: &str) -> Result<Vec<Token>, NozomiError> {
    tokenize_with_rules(tagger, text, &default_corrections())
}

pub fn tokenize_with_rules(
    tagger: &dyn Tagger,
    text: &str,
    rules: &[CorrectionRule],
) -> Result<Vec<Token>, NozomiError> {
    let cleaned = clean_text(text);
    let protected = protect_numerals(&cleaned);

    let raw = tagger.analyze(&protected.text).map_err(|e| match e {
        NozomiError::TokenizationFailure { .. } => e,
        other => NozomiError::tokenization(text, other.to_string()),
    })?;
    if raw.is_empty() {
        return Err(NozomiError::tokenization(text, "tagger returned no tokens"));
    }

    let mut tokens: Vec<Token> = raw.into_iter().map(Token::from).collect();
    for token in tokens.iter_mut() {
        apply_corrections(token, rules);
        trace!(
            surface = %token.surface,
            pos = %token.pos_label(),
            lemma = %token.lemma,
            reading = %token.reading,
            "token"
        );
    }

    Ok(restore_numerals(tokens, &protected.numerals))
}
