pub mod romaji;
pub mod table;
pub mod yomikata;

pub use romaji::{
    romanize_kana,
    romanize_kana_with,
    RomanizeOptions,
};
pub use yomikata::{
    reading_words,
    romanize,
    romanize_with,
    yomikata,
    yomikata_words,
    ReadingKind,
    ReadingScript,
    YomikataOptions,
};
