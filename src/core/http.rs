use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
    thread,
    time::Duration,
};

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::{
        ACCEPT_ENCODING,
        USER_AGENT,
    },
};
use tracing::warn;

use crate::core::NozomiError;

const MAX_ATTEMPTS: u64 = 3;
const AGENT: &str = concat!("nozomi/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

pub fn http_client() -> Result<Client, NozomiError> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| NozomiError::Custom(format!("HTTP client build failed: {e}")))
}

fn backoff(attempt: u64) {
    thread::sleep(Duration::from_secs(2 * attempt));
}

/// Streams `url` into `path`, retrying transport failures and empty bodies.
pub fn download_to_file(client: &Client, url: &str, path: &Path) -> Result<(), NozomiError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let last = attempt == MAX_ATTEMPTS;

        let mut resp = match client
            .get(url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT_ENCODING, "identity")
            .send()
        {
            Ok(resp) => resp,
            Err(e) if !last => {
                warn!(url, attempt, error = %e, "download failed, retrying");
                backoff(attempt);
                continue;
            }
            Err(e) => return Err(NozomiError::Custom(format!("Failed HTTP GET {url}: {e}"))),
        };

        ensure_success(&resp)?;

        let mut writer = BufWriter::new(File::create(path)?);
        match resp.copy_to(&mut writer) {
            Ok(n) if n > 0 => {
                writer.flush()?;
                return Ok(());
            }
            _ if !last => {
                warn!(url, attempt, "empty or interrupted download, retrying");
                backoff(attempt);
            }
            _ => break,
        }
    }

    Err(NozomiError::Custom(format!("Failed to copy response body from {url} to {path:?}")))
}

fn ensure_success(resp: &Response) -> Result<(), NozomiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(NozomiError::Custom(format!("HTTP error {status} from {}", resp.url())));
    }
    Ok(())
}
