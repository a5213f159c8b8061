use std::{
    path::PathBuf,
    process,
};

use clap::{
    Parser,
    Subcommand,
};
use nozomi::{
    dictionary::ensure_dictionary,
    romanization::{
        ReadingKind,
        ReadingScript,
        RomanizeOptions,
    },
    Nozomi,
    NozomiError,
    Settings,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nozomi", about = "Japanese conjugation, readings and romanization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the conjugation table of a verb or adjective
    Conjugate {
        /// Word in any inflected form
        word: String,
    },

    /// Print the kana reading of a text
    Yomikata {
        text: String,
        /// Hiragana instead of katakana
        #[arg(long)]
        hiragana: bool,
        /// Separator placed between prosodic words
        #[arg(long)]
        sep: Option<String>,
        /// Spell particles as written (は, へ, を)
        #[arg(long)]
        orthographic: bool,
    },

    /// Print the Hepburn romanization of a text
    Romanize {
        text: String,
        /// Romanize the kana spelling without sound changes
        #[arg(long)]
        orthographic: bool,
    },

    /// Print the corrected tokens of a text as JSON lines
    Tokenize { text: String },

    /// Download the configured dictionary if it is not installed yet
    FetchDictionary,

    /// Write the settings file and print where it lives
    Settings {
        /// Compiled system.dic to use instead of the downloaded one
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("NOZOMI_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn progress() -> Option<Box<dyn Fn(String) + Send>> {
    Some(Box::new(|message| eprintln!("{}", message)))
}

fn open(settings: &Settings) -> Nozomi {
    Nozomi::from_settings(settings, progress()).unwrap_or_else(|e| {
        eprintln!("Failed to load tokenizer: {}", e);
        process::exit(1);
    })
}

fn run(cli: Cli, settings: Settings) -> Result<(), NozomiError> {
    match cli.command {
        Command::Conjugate { word } => {
            let nozomi = open(&settings);
            let Some(paradigm) = nozomi.conjugate(&word) else {
                eprintln!("No conjugation table for {}", word);
                process::exit(2);
            };
            for (slot, form) in paradigm.slots().iter().zip(paradigm.forms()) {
                println!("{:<12}{}", slot, form.unwrap_or("-"));
            }
        }
        Command::Yomikata { text, hiragana, sep, orthographic } => {
            let mut reading = settings.reading.clone();
            if hiragana {
                reading.script = ReadingScript::Hiragana;
            }
            if let Some(sep) = sep {
                reading.separator = sep;
            }
            if orthographic {
                reading.kind = ReadingKind::Orthographic;
            }
            let nozomi = open(&settings).with_reading(reading);
            println!("{}", nozomi.yomikata(&text)?);
        }
        Command::Romanize { text, orthographic } => {
            let mut options = settings.romanize_options();
            if orthographic {
                options = RomanizeOptions { phonemic: false };
            }
            let nozomi = open(&settings).with_romanize(options);
            println!("{}", nozomi.romanize(&text)?);
        }
        Command::Tokenize { text } => {
            let nozomi = open(&settings);
            for token in nozomi.tokenize(&text)? {
                println!("{}", serde_json::to_string(&token)?);
            }
        }
        Command::FetchDictionary => {
            let path = ensure_dictionary(&settings.dict_type, progress())?;
            println!("{}", path.display());
        }
        Command::Settings { dictionary } => {
            let mut settings = settings;
            if dictionary.is_some() {
                settings.dictionary_path = dictionary;
            }
            settings.save()?;
            println!("{}", Settings::path().display());
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load();

    if let Err(e) = run(cli, settings) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
