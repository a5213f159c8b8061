pub mod corrections;
pub mod numerals;
pub mod token_models;
pub mod tokenizer;
pub mod unidic_tags;

pub use token_models::{
    PhoneticToken,
    Token,
};
pub use tokenizer::{
    clean_text,
    tokenize,
    Tagger,
    VibratoTagger,
};
