use std::{fmt::Display, thread::sleep, time::Duration};

use crawler::{
    errors::CrawlerError,
    traits::{ElementHandle, PageHandle, Query},
};
use tracing::{debug, trace};

/// What the collapsible control we are after looks like.
#[derive(Debug, Clone)]
pub struct PanelTarget {
    /// Text the control (or its heading) carries.
    pub phrase: String,
    /// Exact `class` attribute of the heading inside the control.
    pub heading_class: String,
    /// Tag of the clickable control, e.g. `summary`.
    pub control_tag: String,
    /// Exact `class` attribute of the clickable control.
    pub control_class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorStrategy {
    /// Exactly classed heading with the exact phrase, walked up to its control.
    ExactHeading,
    /// Any control whose text contains the phrase.
    ContainsText,
    /// Every control on the page, text tested one by one.
    ExhaustiveScan,
}

impl Display for LocatorStrategy {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LocatorStrategy::ExactHeading => "exact heading",
            LocatorStrategy::ContainsText => "text containment",
            LocatorStrategy::ExhaustiveScan => "exhaustive scan",
        };

        write!(formatter, "{name}")
    }
}

impl LocatorStrategy {
    /// Most specific first.
    pub const ORDERED: [LocatorStrategy; 3] = [
        LocatorStrategy::ExactHeading,
        LocatorStrategy::ContainsText,
        LocatorStrategy::ExhaustiveScan,
    ];

    fn attempt<'p, P: PageHandle>(
        &self,
        page: &'p P,
        target: &PanelTarget,
    ) -> Result<Option<P::Element<'p>>, CrawlerError> {
        match self {
            LocatorStrategy::ExactHeading => {
                let expression = format!(
                    "//h2[@class={} and text()={}]/ancestor::{}[@class={}]",
                    xpath_literal(&target.heading_class),
                    xpath_literal(&target.phrase),
                    target.control_tag,
                    xpath_literal(&target.control_class),
                );

                page.find_one(&Query::xpath(expression))
            }
            LocatorStrategy::ContainsText => {
                let expression = format!(
                    "//{}[contains(., {})]",
                    target.control_tag,
                    xpath_literal(&target.phrase)
                );

                page.find_one(&Query::xpath(expression))
            }
            LocatorStrategy::ExhaustiveScan => {
                let controls = page.find_all(&Query::css(target.control_tag.as_str()))?;

                Ok(controls.into_iter().find(|control| match control.text() {
                    Ok(text) => text.contains(target.phrase.as_str()),
                    Err(err) => {
                        trace!("Skipping unreadable control: {err}");
                        false
                    }
                }))
            }
        }
    }
}

/// Outcome of a resolution. Not finding the control is a normal result.
#[derive(Debug)]
pub enum Located<E> {
    Found {
        element: E,
        strategy: LocatorStrategy,
        scrolls: u32,
    },
    NotFound {
        scrolls: u32,
    },
}

impl<E> Located<E> {
    pub fn into_element(self) -> Option<E> {
        match self {
            Located::Found { element, .. } => Some(element),
            Located::NotFound { .. } => None,
        }
    }
}

/// Scroll-and-retry budget for lazily rendered pages.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Scrolls allowed before giving up.
    pub max_attempts: u32,
    pub scroll_step_px: u32,
    pub settle: Duration,
}

impl RetryPolicy {
    fn scroll_script(&self) -> String {
        format!("window.scrollBy(0, {});", self.scroll_step_px)
    }
}

/// Runs the strategies in order against the current DOM, no scrolling.
///
/// A strategy that errors counts as a miss for that strategy only.
pub fn find_with_strategies<'p, P: PageHandle>(
    page: &'p P,
    target: &PanelTarget,
) -> Option<(P::Element<'p>, LocatorStrategy)> {
    LocatorStrategy::ORDERED.into_iter().find_map(|strategy| {
        match strategy.attempt(page, target) {
            Ok(found) => found.map(|element| (element, strategy)),
            Err(err) => {
                debug!("Strategy '{strategy}' failed: {err}");
                None
            }
        }
    })
}

/// Finds the control described by `target`, scrolling forward between passes.
///
/// Makes one pass, then at most `policy.max_attempts` scroll-and-retry cycles.
/// `Err` only comes from the scroll itself.
pub fn resolve<'p, P: PageHandle>(
    page: &'p P,
    target: &PanelTarget,
    policy: &RetryPolicy,
) -> Result<Located<P::Element<'p>>, CrawlerError> {
    let mut scrolls = 0;

    loop {
        if let Some((element, strategy)) = find_with_strategies(page, target) {
            debug!("'{}' found via {strategy}", target.phrase);
            return Ok(Located::Found {
                element,
                strategy,
                scrolls,
            });
        }

        if scrolls >= policy.max_attempts {
            debug!("'{}' not found after {scrolls} scroll(s)", target.phrase);
            return Ok(Located::NotFound { scrolls });
        }

        scrolls += 1;
        debug!(
            "Scrolling down looking for '{}' ({scrolls}/{})",
            target.phrase, policy.max_attempts
        );

        page.execute_script(&policy.scroll_script())?;
        sleep(policy.settle);
    }
}

/// Quotes `value` as an XPath 1.0 string literal.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }

    if !value.contains('"') {
        return format!("\"{value}\"");
    }

    let parts: Vec<String> = value.split('\'').map(|part| format!("'{part}'")).collect();

    format!("concat({})", parts.join(", \"'\", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeElement, FakePage};

    const PHRASE: &str = "Informação Nutricional";

    fn target() -> PanelTarget {
        PanelTarget {
            phrase: PHRASE.into(),
            heading_class: " font-heading h5 inline-richtext".into(),
            control_tag: "summary".into(),
            control_class: "accordion-details__summary".into(),
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            scroll_step_px: 500,
            settle: Duration::ZERO,
        }
    }

    fn exact_query() -> Query {
        Query::xpath(
            "//h2[@class=' font-heading h5 inline-richtext' and text()='Informação Nutricional']\
             /ancestor::summary[@class='accordion-details__summary']",
        )
    }

    fn contains_query() -> Query {
        Query::xpath("//summary[contains(., 'Informação Nutricional')]")
    }

    #[test]
    fn exact_heading_is_preferred() {
        let page = FakePage::single(
            FakePage::document()
                .with(exact_query(), vec![FakeElement::new("exact")])
                .with(contains_query(), vec![FakeElement::new("loose")])
                .with(Query::css("summary"), vec![FakeElement::new(PHRASE)]),
        );

        let Located::Found {
            element, strategy, ..
        } = resolve(&page, &target(), &policy(3)).unwrap()
        else {
            panic!("control should be found");
        };

        assert_eq!(strategy, LocatorStrategy::ExactHeading);
        assert_eq!(element.text().unwrap(), "exact");
    }

    #[test]
    fn falls_back_to_containment() {
        let page = FakePage::single(
            FakePage::document().with(contains_query(), vec![FakeElement::new("loose")]),
        );

        let (_, strategy) = find_with_strategies(&page, &target()).unwrap();

        assert_eq!(strategy, LocatorStrategy::ContainsText);
    }

    #[test]
    fn third_strategy_alone_still_finds_the_control() {
        let page = FakePage::single(FakePage::document().with(
            Query::css("summary"),
            vec![
                FakeElement::new("Descrição"),
                FakeElement::new("Modo de uso").unreadable(),
                FakeElement::new(&format!("  {PHRASE}  ")),
            ],
        ));

        let located = resolve(&page, &target(), &policy(2)).unwrap();

        let Located::Found {
            element,
            strategy,
            scrolls,
        } = located
        else {
            panic!("control should be found");
        };
        assert_eq!(strategy, LocatorStrategy::ExhaustiveScan);
        assert!(element.text().unwrap().contains(PHRASE));
        assert_eq!(scrolls, 0);
        assert_eq!(page.scrolls(), 0);
    }

    #[test]
    fn erroring_strategies_do_not_stop_the_chain() {
        let page = FakePage::single(
            FakePage::document()
                .with_failing(exact_query())
                .with_failing(contains_query())
                .with(Query::css("summary"), vec![FakeElement::new(PHRASE)]),
        );

        let (_, strategy) = find_with_strategies(&page, &target()).unwrap();

        assert_eq!(strategy, LocatorStrategy::ExhaustiveScan);
    }

    #[test]
    fn lazily_rendered_control_is_found_after_scrolling() {
        let page = FakePage::single(FakePage::document().with_after_scrolls(
            Query::css("summary"),
            vec![FakeElement::new(PHRASE)],
            3,
        ));

        let located = resolve(&page, &target(), &policy(10)).unwrap();

        assert!(matches!(located, Located::Found { scrolls: 3, .. }));
        assert_eq!(page.scrolls(), 3);
    }

    #[test]
    fn gives_up_within_the_attempt_budget() {
        let page = FakePage::single(FakePage::document().with_after_scrolls(
            Query::css("summary"),
            vec![FakeElement::new(PHRASE)],
            5,
        ));

        let located = resolve(&page, &target(), &policy(4)).unwrap();

        assert!(matches!(located, Located::NotFound { scrolls: 4 }));
        assert_eq!(page.scrolls(), 4);
    }

    #[test]
    fn zero_budget_means_a_single_pass() {
        let page = FakePage::single(FakePage::document());

        let located = resolve(&page, &target(), &policy(0)).unwrap();

        assert!(located.into_element().is_none());
        assert_eq!(page.scrolls(), 0);
    }

    #[test]
    fn xpath_literals_survive_quotes() {
        assert_eq!(xpath_literal("Informação"), "'Informação'");
        assert_eq!(xpath_literal("it's"), "\"it's\"");
        assert_eq!(
            xpath_literal(r#"a'b"c"#),
            r#"concat('a', "'", 'b"c')"#
        );
    }
}
