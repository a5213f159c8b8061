use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::NozomiError;

const APP_NAME: &str = "nozomi";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            warn!(dir = %app_dir.display(), error = %e, "could not create data directory");
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<(), NozomiError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved");
    Ok(())
}

/// Reads `path`, or returns `T::default()` when the file does not exist yet.
pub fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, NozomiError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let json = fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    debug!(path = %path.display(), "loaded");
    Ok(data)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), NozomiError> {
    write_json(data, &get_data_file_path(filename))
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, NozomiError> {
    read_json(&get_data_file_path(filename))
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json(filename).unwrap_or_else(|e| {
        warn!(file = filename, error = %e, "failed to load, using defaults");
        T::default()
    })
}
