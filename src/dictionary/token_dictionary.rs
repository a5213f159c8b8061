use std::{
    fs::{
        self,
        File,
    },
    io::{
        self,
        BufReader,
        BufWriter,
    },
    path::{
        Path,
        PathBuf,
    },
};

use liblzma::read::XzDecoder;
use serde::{
    Deserialize,
    Serialize,
};
use tar::Archive;
use tracing::{
    debug,
    info,
    warn,
};
use vibrato::Dictionary;
use zstd::stream::{
    copy_decode,
    read::Decoder,
};

use crate::{
    core::{
        http::{
            download_to_file,
            http_client,
        },
        NozomiError,
    },
    persistence::get_app_data_dir,
};

const SYSTEM_DIC: &str = "system.dic";
const KEEP_FILES: [&str; 3] = [SYSTEM_DIC, "BSD", "NOTICE"];

pub type ProgressCallback = Option<Box<dyn Fn(String) + Send>>;

fn tokenizer_dict_dir() -> PathBuf {
    get_app_data_dir().join("dictionaries").join("tokenizer")
}

/// Prebuilt vibrato dictionaries published with the vibrato releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictType {
    #[default]
    Unidic,
    Ipadic,
}

impl DictType {
    fn url(&self) -> &'static str {
        match self {
            DictType::Unidic => {
                "https://github.com/daac-tools/vibrato/releases/download/v0.5.0/bccwj-suw+unidic-cwj-3_1_1.tar.xz"
            }
            DictType::Ipadic => {
                "https://github.com/daac-tools/vibrato/releases/download/v0.5.0/ipadic-mecab-2_7_0.tar.xz"
            }
        }
    }

    fn folder_name(&self) -> &'static str {
        match self {
            DictType::Unidic => "bccwj-suw+unidic-cwj-3_1_1",
            DictType::Ipadic => "ipadic-mecab-2_7_0",
        }
    }

    /// Where `ensure_dictionary` leaves the decompressed dictionary.
    pub fn installed_path(&self) -> PathBuf {
        tokenizer_dict_dir().join(self.folder_name()).join(SYSTEM_DIC)
    }
}

fn report(message: &str, callback: &ProgressCallback) {
    info!("{message}");
    if let Some(cb) = callback {
        cb(message.to_string());
    }
}

fn io_context<'a>(action: &str, path: &'a Path) -> impl FnOnce(io::Error) -> NozomiError + 'a {
    let action = action.to_string();
    move |e| NozomiError::Custom(format!("{action} {path:?}: {e}"))
}

fn cleanup_extracted(folder: &Path) -> Result<(), NozomiError> {
    for entry in fs::read_dir(folder).map_err(io_context("Failed to read", folder))? {
        let path = entry?.path();
        let keep = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| KEEP_FILES.contains(&name));
        if keep {
            continue;
        }

        debug!(path = %path.display(), "removing extracted file");
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(io_context("Failed to remove directory", &path))?;
        } else {
            fs::remove_file(&path).map_err(io_context("Failed to remove file", &path))?;
        }
    }
    Ok(())
}

/// Downloads and unpacks the dictionary for `dict_type` unless it is already
/// installed, and returns the path of its `system.dic`.
pub fn ensure_dictionary(
    dict_type: &DictType,
    progress_callback: ProgressCallback,
) -> Result<PathBuf, NozomiError> {
    let folder_name = dict_type.folder_name();
    let dict_dir = tokenizer_dict_dir();
    let extract_path = dict_dir.join(folder_name);
    let final_dic_path = dict_type.installed_path();

    if final_dic_path.exists() {
        report("Tokenizer dictionary already installed", &progress_callback);
        return Ok(final_dic_path);
    }

    fs::create_dir_all(&dict_dir).map_err(io_context("Failed to create", &dict_dir))?;

    // leftovers from an interrupted install
    let download_path = dict_dir.join(format!("{folder_name}.tar.xz"));
    let tar_path = dict_dir.join(format!("{folder_name}.tar"));
    fs::remove_file(&download_path).ok();
    fs::remove_file(&tar_path).ok();
    fs::remove_dir_all(&extract_path).ok();

    report("Downloading tokenizer dictionary...", &progress_callback);
    let client = http_client()?;
    download_to_file(&client, dict_type.url(), &download_path)?;

    let size = download_path.metadata().map_err(io_context("Failed to stat", &download_path))?.len();
    if size == 0 {
        return Err(NozomiError::Custom(format!(
            "Downloaded file {download_path:?} is empty. Check your internet connection."
        )));
    }

    report("Decompressing dictionary archive...", &progress_callback);
    let xz = File::open(&download_path).map_err(io_context("Failed to open", &download_path))?;
    let mut tar_file = File::create(&tar_path).map_err(io_context("Failed to create", &tar_path))?;
    io::copy(&mut XzDecoder::new(BufReader::new(xz)), &mut tar_file).map_err(|e| {
        NozomiError::Custom(format!("Failed to decompress XZ archive, possibly corrupt: {e}"))
    })?;

    let tar_file = File::open(&tar_path).map_err(io_context("Failed to open", &tar_path))?;
    Archive::new(BufReader::new(tar_file))
        .unpack(&extract_path)
        .map_err(io_context("Failed to unpack into", &extract_path))?;

    let inner_path = extract_path.join(folder_name);
    let zst_path = inner_path.join("system.dic.zst");
    if !zst_path.exists() {
        return Err(NozomiError::Custom(format!(
            "system.dic.zst not found at {zst_path:?} after extraction"
        )));
    }

    report("Finalizing tokenizer dictionary...", &progress_callback);
    let zst_file = File::open(&zst_path).map_err(io_context("Failed to open", &zst_path))?;
    let dic_file =
        File::create(&final_dic_path).map_err(io_context("Failed to create", &final_dic_path))?;
    copy_decode(BufReader::new(zst_file), BufWriter::new(dic_file))
        .map_err(io_context("Failed to decompress", &final_dic_path))?;

    for license in ["BSD", "NOTICE"] {
        if let Err(e) = fs::rename(inner_path.join(license), extract_path.join(license)) {
            warn!(file = license, error = %e, "license file missing from dictionary archive");
        }
    }

    cleanup_extracted(&extract_path)?;
    fs::remove_file(&download_path)?;
    fs::remove_file(&tar_path)?;
    report("Tokenizer dictionary ready", &progress_callback);

    Ok(final_dic_path)
}

/// Reads a compiled vibrato dictionary. Files ending in `.zst` are
/// decompressed on the fly.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, NozomiError> {
    let file = File::open(path).map_err(io_context("Failed to open dictionary", path))?;
    let dict = if path.extension().is_some_and(|ext| ext == "zst") {
        Dictionary::read(Decoder::new(file)?)?
    } else {
        Dictionary::read(BufReader::new(file))?
    };
    Ok(dict)
}
