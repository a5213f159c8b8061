use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::NozomiError,
    dictionary::token_dictionary::DictType,
    persistence::{
        get_data_file_path,
        load_json_or_default,
        save_json,
    },
    romanization::{
        RomanizeOptions,
        YomikataOptions,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dict_type: DictType,
    /// Compiled `system.dic` to use instead of the downloaded one.
    pub dictionary_path: Option<PathBuf>,
    pub reading: YomikataOptions,
    pub romanize_phonemic: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dict_type: DictType::Unidic,
            dictionary_path: None,
            reading: YomikataOptions::default(),
            romanize_phonemic: true,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), NozomiError> {
        save_json(self, SETTINGS_FILE)
    }

    pub fn path() -> PathBuf {
        get_data_file_path(SETTINGS_FILE)
    }

    pub fn romanize_options(&self) -> RomanizeOptions {
        RomanizeOptions { phonemic: self.romanize_phonemic }
    }
}
