use std::path::{Path, PathBuf};

use headless_chrome::browser::default_executable;
use tracing::{debug, info};

use crate::errors::CrawlerError;

/// Resolves the Chrome/Chromium executable to launch.
///
/// An explicit path wins and must exist. Otherwise the `CHROME` environment
/// variable and the usual install locations are searched.
pub fn find_browser_executable(explicit: Option<&Path>) -> Result<PathBuf, CrawlerError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CrawlerError::BrowserNotFound(format!(
                "{} is not a file",
                path.display()
            )));
        }

        info!("Using browser at {}", path.display());
        return Ok(path.to_path_buf());
    }

    debug!("Searching for a Chrome/Chromium executable");

    let path = default_executable().map_err(CrawlerError::BrowserNotFound)?;
    info!("Browser found at {}", path.display());

    Ok(path)
}
