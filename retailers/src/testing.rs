//! In-memory DOM for exercising collectors without a browser.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    rc::Rc,
    time::Duration,
};

use crawler::{
    errors::CrawlerError,
    traits::{ElementHandle, PageHandle, Query},
};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeElement {
    text: String,
    attributes: HashMap<String, String>,
    children: HashMap<String, Vec<FakeElement>>,
    clicks: Rc<Cell<u32>>,
    unreadable: bool,
}

impl FakeElement {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub(crate) fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub(crate) fn with_children(mut self, selector: &str, children: Vec<FakeElement>) -> Self {
        self.children.insert(selector.into(), children);
        self
    }

    pub(crate) fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    /// Clicks on this element or any of its clones.
    pub(crate) fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl ElementHandle for FakeElement {
    fn text(&self) -> Result<String, CrawlerError> {
        if self.unreadable {
            return Err(CrawlerError::ElementFailed("detached element".into()));
        }

        Ok(self.text.clone())
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, CrawlerError> {
        Ok(self.attributes.get(name).cloned())
    }

    fn find_one(&self, selector: &str) -> Result<Option<Self>, CrawlerError> {
        Ok(self
            .children
            .get(selector)
            .and_then(|children| children.first())
            .cloned())
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Self>, CrawlerError> {
        Ok(self.children.get(selector).cloned().unwrap_or_default())
    }

    fn scroll_into_view(&self) -> Result<(), CrawlerError> {
        Ok(())
    }

    fn click(&self) -> Result<(), CrawlerError> {
        self.clicks.set(self.clicks.get() + 1);
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    query: Query,
    elements: Vec<FakeElement>,
    after_scrolls: u32,
    failing: bool,
}

/// The queries one page answers.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeDocument {
    entries: Vec<Entry>,
}

impl FakeDocument {
    pub(crate) fn with(self, query: Query, elements: Vec<FakeElement>) -> Self {
        self.with_after_scrolls(query, elements, 0)
    }

    /// Elements that only render once the page was scrolled `scrolls` times.
    pub(crate) fn with_after_scrolls(
        mut self,
        query: Query,
        elements: Vec<FakeElement>,
        scrolls: u32,
    ) -> Self {
        self.entries.push(Entry {
            query,
            elements,
            after_scrolls: scrolls,
            failing: false,
        });
        self
    }

    /// A query that errors instead of answering.
    pub(crate) fn with_failing(mut self, query: Query) -> Self {
        self.entries.push(Entry {
            query,
            elements: Vec::new(),
            after_scrolls: 0,
            failing: true,
        });
        self
    }
}

const BLANK_URL: &str = "about:blank";

#[derive(Debug, Default)]
pub(crate) struct FakePage {
    documents: HashMap<String, FakeDocument>,
    lost_sessions: HashSet<String>,
    current: RefCell<Option<String>>,
    scrolls: Cell<u32>,
    navigations: RefCell<Vec<String>>,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn document() -> FakeDocument {
        FakeDocument::default()
    }

    /// A page already showing `document`.
    pub(crate) fn single(document: FakeDocument) -> Self {
        let page = Self::new().with_page(BLANK_URL, document);
        page.current.replace(Some(BLANK_URL.into()));
        page
    }

    pub(crate) fn with_page(mut self, url: &str, document: FakeDocument) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    /// Navigating to `url` reports the browser as gone.
    pub(crate) fn with_lost_session(mut self, url: &str) -> Self {
        self.lost_sessions.insert(url.into());
        self
    }

    /// Scrolls since the last navigation.
    pub(crate) fn scrolls(&self) -> u32 {
        self.scrolls.get()
    }

    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    fn visible(&self, query: &Query) -> Result<Vec<FakeElement>, CrawlerError> {
        let current = self.current.borrow();
        let Some(document) = current.as_ref().and_then(|url| self.documents.get(url)) else {
            return Ok(Vec::new());
        };

        let mut elements = Vec::new();

        for entry in document.entries.iter().filter(|entry| &entry.query == query) {
            if entry.failing {
                return Err(CrawlerError::ElementFailed(format!("{query} failed")));
            }

            if entry.after_scrolls <= self.scrolls.get() {
                elements.extend(entry.elements.iter().cloned());
            }
        }

        Ok(elements)
    }
}

impl PageHandle for FakePage {
    type Element<'a> = FakeElement;

    fn navigate(&self, url: &str) -> Result<(), CrawlerError> {
        self.navigations.borrow_mut().push(url.into());

        if self.lost_sessions.contains(url) {
            return Err(CrawlerError::SessionFailed("browser connection closed".into()));
        }

        if !self.documents.contains_key(url) {
            return Err(CrawlerError::NavigationFailed(
                url.into(),
                "net::ERR_NAME_NOT_RESOLVED".into(),
            ));
        }

        self.current.replace(Some(url.into()));
        self.scrolls.set(0);

        Ok(())
    }

    fn find_one(&self, query: &Query) -> Result<Option<FakeElement>, CrawlerError> {
        Ok(self.visible(query)?.into_iter().next())
    }

    fn find_all(&self, query: &Query) -> Result<Vec<FakeElement>, CrawlerError> {
        self.visible(query)
    }

    fn execute_script(&self, script: &str) -> Result<Value, CrawlerError> {
        if script.contains("scrollBy") {
            self.scrolls.set(self.scrolls.get() + 1);
        }

        Ok(Value::Null)
    }

    fn wait_until(&self, query: &Query, timeout: Duration) -> Result<FakeElement, CrawlerError> {
        self.find_one(query)?
            .ok_or_else(|| CrawlerError::WaitTimeout(query.to_string(), timeout))
    }
}
