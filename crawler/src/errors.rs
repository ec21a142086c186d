use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error(
        "No compatible browser found ({0}). Install Google Chrome or Chromium, \
         or point the CHROME environment variable or --chrome-path at its executable"
    )]
    BrowserNotFound(String),
    #[error("Invalid browser launch options: {0}")]
    InvalidLaunchOptions(String),
    #[error("Browser session failed: {0}")]
    SessionFailed(String),
    #[error("Failed to navigate to {0}: {1}")]
    NavigationFailed(String, String),
    #[error("Timed out after {1:?} waiting for {0}")]
    WaitTimeout(String, std::time::Duration),
    #[error("Element operation failed: {0}")]
    ElementFailed(String),
    #[error("Script evaluation failed: {0}")]
    ScriptFailed(String),
}

impl CrawlerError {
    /// Failures scoped to one page or element. The session itself is still
    /// usable and the next page can be tried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CrawlerError::NavigationFailed(..)
                | CrawlerError::WaitTimeout(..)
                | CrawlerError::ElementFailed(_)
                | CrawlerError::ScriptFailed(_)
        )
    }
}
