use std::{ffi::OsStr, sync::Arc, time::Duration};

use headless_chrome::{Browser, Element, LaunchOptionsBuilder, Tab, browser::tab::NoElementFound};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    discovery::find_browser_executable,
    errors::CrawlerError,
    launch::LaunchConfig,
    traits::{ElementHandle, PageHandle, Query},
};

// the default of 30s is shorter than a slow product page plus its settle delays
const IDLE_BROWSER_TIMEOUT_SECS: u64 = 300;

/// One exclusively owned Chrome process with a single tab.
///
/// The process is released when the session is dropped, so every exit path
/// of a collection run closes the browser.
pub struct ChromeSession {
    tab: Arc<Tab>,
    // dropped after the tab; dropping it kills the process
    _browser: Browser,
}

impl ChromeSession {
    pub fn launch(config: &LaunchConfig) -> Result<Self, CrawlerError> {
        let executable = find_browser_executable(config.executable.as_deref())?;

        let extra_args = config.extra_args();
        let args: Vec<&OsStr> = extra_args.iter().map(OsStr::new).collect();

        let launch_opts = LaunchOptionsBuilder::default()
            .headless(config.headless)
            .sandbox(false)
            .window_size(Some(config.window_size))
            .path(Some(executable))
            .idle_browser_timeout(Duration::from_secs(IDLE_BROWSER_TIMEOUT_SECS))
            .args(args)
            .build()
            .map_err(|err| CrawlerError::InvalidLaunchOptions(err.to_string()))?;

        let browser =
            Browser::new(launch_opts).map_err(|err| CrawlerError::SessionFailed(err.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|err| CrawlerError::SessionFailed(err.to_string()))?;

        info!(
            "Browser session started (headless: {}, zoom: {}%)",
            config.headless, config.zoom_percent
        );

        Ok(Self {
            tab,
            _browser: browser,
        })
    }

    pub fn title(&self) -> Result<String, CrawlerError> {
        self.tab
            .get_title()
            .map_err(|err| CrawlerError::SessionFailed(err.to_string()))
    }

    /// Closes the tab and terminates the browser process.
    pub fn quit(self) {
        drop(self);
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        info!("Releasing browser session");

        if let Err(err) = self.tab.close(false) {
            warn!("Failed to close tab cleanly: {err}");
        }
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<NoElementFound>().is_some()
}

fn optional<T>(result: anyhow::Result<T>) -> Result<Option<T>, CrawlerError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_not_found(&err) => Ok(None),
        Err(err) => Err(CrawlerError::ElementFailed(err.to_string())),
    }
}

fn many<T>(result: anyhow::Result<Vec<T>>) -> Result<Vec<T>, CrawlerError> {
    Ok(optional(result)?.unwrap_or_default())
}

impl PageHandle for ChromeSession {
    type Element<'a> = Element<'a>;

    fn navigate(&self, url: &str) -> Result<(), CrawlerError> {
        debug!("Navigating to {url}");

        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|err| CrawlerError::NavigationFailed(url.into(), err.to_string()))?;

        Ok(())
    }

    fn find_one(&self, query: &Query) -> Result<Option<Element<'_>>, CrawlerError> {
        match query {
            Query::Css(selector) => optional(self.tab.find_element(selector)),
            Query::XPath(expression) => optional(self.tab.find_element_by_xpath(expression)),
        }
    }

    fn find_all(&self, query: &Query) -> Result<Vec<Element<'_>>, CrawlerError> {
        match query {
            Query::Css(selector) => many(self.tab.find_elements(selector)),
            Query::XPath(expression) => many(self.tab.find_elements_by_xpath(expression)),
        }
    }

    fn execute_script(&self, script: &str) -> Result<Value, CrawlerError> {
        let remote_object = self
            .tab
            .evaluate(script, false)
            .map_err(|err| CrawlerError::ScriptFailed(err.to_string()))?;

        Ok(remote_object.value.unwrap_or(Value::Null))
    }

    fn wait_until(&self, query: &Query, timeout: Duration) -> Result<Element<'_>, CrawlerError> {
        let result = match query {
            Query::Css(selector) => self.tab.wait_for_element_with_custom_timeout(selector, timeout),
            Query::XPath(expression) => {
                self.tab.wait_for_xpath_with_custom_timeout(expression, timeout)
            }
        };

        result.map_err(|err| {
            debug!("Wait for {query} ended with: {err}");
            CrawlerError::WaitTimeout(query.to_string(), timeout)
        })
    }
}

impl<'a> ElementHandle for Element<'a> {
    fn text(&self) -> Result<String, CrawlerError> {
        self.get_inner_text()
            .map_err(|err| CrawlerError::ElementFailed(err.to_string()))
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, CrawlerError> {
        self.get_attribute_value(name)
            .map_err(|err| CrawlerError::ElementFailed(err.to_string()))
    }

    fn find_one(&self, selector: &str) -> Result<Option<Self>, CrawlerError> {
        optional(self.find_element(selector))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Self>, CrawlerError> {
        many(self.find_elements(selector))
    }

    fn scroll_into_view(&self) -> Result<(), CrawlerError> {
        self.call_js_fn(
            "function() { this.scrollIntoView({ block: 'center' }); }",
            vec![],
            false,
        )
        .map_err(|err| CrawlerError::ElementFailed(err.to_string()))?;

        Ok(())
    }

    // a script click is not intercepted by sticky headers overlapping the element
    fn click(&self) -> Result<(), CrawlerError> {
        self.call_js_fn("function() { this.click(); }", vec![], false)
            .map_err(|err| CrawlerError::ElementFailed(err.to_string()))?;

        Ok(())
    }
}
