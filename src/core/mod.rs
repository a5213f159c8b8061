pub mod errors;
pub mod http;
pub mod settings;
pub mod utils;

pub use errors::NozomiError;
pub use settings::Settings;
