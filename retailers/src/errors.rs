use crawler::errors::CrawlerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetailerError {
    #[error("Browser error: {0}")]
    SessionFailed(#[from] CrawlerError),
    #[error("Run interrupted by user after {0} item(s)")]
    Interrupted(usize),
}
