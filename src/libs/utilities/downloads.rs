//! HTTP downloads for desktop installers.
//!
//! Responses are streamed to disk through `ureq` with an `indicatif` byte
//! progress bar when stderr is a terminal. Anything smaller than
//! [`MIN_DOWNLOAD_BYTES`] is treated as an error page rather than an installer.

use std::fs::{self, File};
use std::io::{self, IsTerminal};
use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::log_debug;

/// Smallest payload accepted as a real installer.
pub const MIN_DOWNLOAD_BYTES: u64 = 1024;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download of {url} failed: {detail}")]
    Http { url: String, detail: String },

    #[error("invalid proxy '{proxy}': {detail}")]
    Proxy { proxy: String, detail: String },

    #[error("downloaded file too small ({size} bytes), possible error: {body}")]
    TooSmall { size: u64, body: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// HTTP agent honouring the configured proxy, else the `*_PROXY` environment.
pub(crate) fn agent(proxy: Option<&str>) -> Result<ureq::Agent, DownloadError> {
    let builder = ureq::AgentBuilder::new().user_agent(concat!("getoai/", env!("CARGO_PKG_VERSION")));
    let builder = match proxy.filter(|p| !p.trim().is_empty()) {
        Some(proxy) => {
            let parsed = ureq::Proxy::new(proxy).map_err(|e| DownloadError::Proxy {
                proxy: proxy.to_string(),
                detail: e.to_string(),
            })?;
            builder.proxy(parsed)
        }
        None => builder.try_proxy_from_env(true),
    };
    Ok(builder.build())
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    if !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            bar
        }
        None => ProgressBar::new_spinner(),
    }
}

/// Streams `url` into `dest` and returns the size on disk.
///
/// `proxy` takes precedence over the `HTTP(S)_PROXY` environment.
pub fn fetch_to_file(url: &str, dest: &Path, proxy: Option<&str>) -> Result<u64, DownloadError> {
    log_debug!("[Downloads] GET {}", url.blue());
    let response = agent(proxy)?
        .get(url)
        .call()
        .map_err(|e| DownloadError::Http {
            url: url.to_string(),
            detail: e.to_string(),
        })?;

    let total = response
        .header("Content-Length")
        .and_then(|len| len.trim().parse::<u64>().ok());
    let bar = progress_bar(total);
    let mut reader = bar.wrap_read(response.into_reader());
    let mut file = File::create(dest)?;
    let copied = io::copy(&mut reader, &mut file);
    bar.finish_and_clear();
    let written = copied?;
    log_debug!(
        "[Downloads] Wrote {} bytes to {}",
        written,
        dest.display().to_string().green()
    );
    verify_size(dest)
}

/// Rejects suspiciously small downloads, quoting their content.
pub fn verify_size(path: &Path) -> Result<u64, DownloadError> {
    let size = fs::metadata(path)?.len();
    if size < MIN_DOWNLOAD_BYTES {
        let body = String::from_utf8_lossy(&fs::read(path)?).trim().to_string();
        return Err(DownloadError::TooSmall { size, body });
    }
    Ok(size)
}

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
