use std::{fmt::Display, time::Duration};

use serde_json::Value;

use crate::errors::CrawlerError;

/// A DOM query understood by a [`PageHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Css(String),
    XPath(String),
}

impl Query {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }
}

impl Display for Query {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Css(selector) => write!(formatter, "css `{selector}`"),
            Query::XPath(expression) => write!(formatter, "xpath `{expression}`"),
        }
    }
}

/// The browser tab the collectors drive.
///
/// `find_one` returns `Ok(None)` when nothing matches; `Err` is reserved for
/// a broken session.
pub trait PageHandle {
    type Element<'a>: ElementHandle
    where
        Self: 'a;

    fn navigate(&self, url: &str) -> Result<(), CrawlerError>;

    fn find_one(&self, query: &Query) -> Result<Option<Self::Element<'_>>, CrawlerError>;

    fn find_all(&self, query: &Query) -> Result<Vec<Self::Element<'_>>, CrawlerError>;

    fn execute_script(&self, script: &str) -> Result<Value, CrawlerError>;

    /// Blocks until `query` matches or `timeout` elapses.
    fn wait_until(
        &self,
        query: &Query,
        timeout: Duration,
    ) -> Result<Self::Element<'_>, CrawlerError>;
}

/// An element living on a [`PageHandle`]. Child lookups take css selectors.
pub trait ElementHandle: Sized {
    fn text(&self) -> Result<String, CrawlerError>;

    fn attribute(&self, name: &str) -> Result<Option<String>, CrawlerError>;

    fn find_one(&self, selector: &str) -> Result<Option<Self>, CrawlerError>;

    fn find_all(&self, selector: &str) -> Result<Vec<Self>, CrawlerError>;

    fn scroll_into_view(&self) -> Result<(), CrawlerError>;

    fn click(&self) -> Result<(), CrawlerError>;
}
