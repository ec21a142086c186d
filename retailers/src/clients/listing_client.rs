use std::{
    iter::{once, repeat},
    thread::sleep,
};

use common::{config::CollectorConfig, result::product::ProductStub, stop::StopSignal};
use crawler::traits::PageHandle;
use tracing::{info, warn};

use crate::{
    assembler::{assemble, merge},
    errors::RetailerError,
    structures::{CategoryQuery, Retailer},
};

/// Walks category listings and gathers a deduplicated list of products.
pub struct ListingClient<'p, P: PageHandle> {
    page: &'p P,
    retailer: Box<dyn Retailer>,
    config: CollectorConfig,
    stop: StopSignal,
}

impl<'p, P: PageHandle> ListingClient<'p, P> {
    pub fn new(
        page: &'p P,
        retailer: Box<dyn Retailer>,
        config: CollectorConfig,
        stop: StopSignal,
    ) -> Self {
        Self {
            page,
            retailer,
            config,
            stop,
        }
    }

    /// Collects every category in order and merges the results by url.
    ///
    /// A category that fails to load or whose grid never renders contributes
    /// nothing. Only a lost browser session ends the run.
    pub fn collect_urls(
        &self,
        categories: &[CategoryQuery],
    ) -> Result<Vec<ProductStub>, RetailerError> {
        let mut per_category: Vec<Vec<ProductStub>> = Vec::new();
        let mut running_total = 0;

        for (index, category) in categories.iter().enumerate() {
            if self.stop.is_raised() {
                return Err(RetailerError::Interrupted(running_total));
            }

            info!("=== Collecting: {} ===", category.name);
            info!("URL: {}", category.url);

            let stubs = self.collect_category(category)?;
            info!("{} products collected from {}", stubs.len(), category.name);

            running_total += stubs.len();
            info!("Running total: {running_total} urls");
            per_category.push(stubs);

            if index + 1 < categories.len() {
                sleep(self.config.category_delay);
            }
        }

        let merged = merge(per_category);
        info!(
            "{} finished: {} unique product urls",
            self.retailer.get_retailer_name(),
            merged.len()
        );

        Ok(merged)
    }

    fn collect_category(&self, category: &CategoryQuery) -> Result<Vec<ProductStub>, RetailerError> {
        if let Err(err) = self.page.navigate(&category.url) {
            if !err.is_transient() {
                return Err(err.into());
            }

            warn!("Skipping {}: {err}", category.name);
            return Ok(Vec::new());
        }

        let timeouts = once(self.config.grid_timeout).chain(repeat(self.config.card_timeout));

        for (query, timeout) in self.retailer.get_listing_ready_queries().iter().zip(timeouts) {
            if let Err(err) = self.page.wait_until(query, timeout) {
                warn!("Listing for {} never rendered: {err}", category.name);
                return Ok(Vec::new());
            }
        }

        sleep(self.config.grid_settle);

        let cards = match self.page.find_all(&self.retailer.get_card_query()) {
            Ok(cards) => cards,
            Err(err) => {
                warn!("Failed to read product cards for {}: {err}", category.name);
                return Ok(Vec::new());
            }
        };
        info!("{} product cards found", cards.len());

        let assembled = assemble(
            &cards,
            &category.name,
            self.retailer.get_base_url(),
            &self.retailer.get_card_layout(),
        );

        if assembled.skipped > 0 {
            info!("{} card(s) without a product link skipped", assembled.skipped);
        }

        Ok(assembled.stubs)
    }
}

#[cfg(test)]
mod tests {
    use crawler::traits::Query;

    use super::*;
    use crate::{
        retailers::max_titanium::MaxTitanium,
        testing::{FakeDocument, FakeElement, FakePage},
    };

    const PRE_WORKOUT_URL: &str = "https://maxtitanium.eu/collections/pre-treinos";
    const PROTEIN_URL: &str = "https://maxtitanium.eu/collections/proteinas";

    fn card(href: &str, title: &str) -> FakeElement {
        FakeElement::new("")
            .with_children(
                "a[href*='/products/']",
                vec![FakeElement::new("").with_attr("href", href)],
            )
            .with_children("h3.product-card__title a", vec![FakeElement::new(title)])
    }

    fn listing(cards: Vec<FakeElement>) -> FakeDocument {
        FakePage::document()
            .with(Query::css("#ProductsList"), vec![FakeElement::new("")])
            .with(Query::css("#ProductsList .product-card"), cards.clone())
            .with(Query::css("#ProductsList .f-column .product-card"), cards)
    }

    fn client(page: &FakePage) -> ListingClient<'_, FakePage> {
        ListingClient::new(
            page,
            Box::new(MaxTitanium::new()),
            CollectorConfig::immediate(),
            StopSignal::new(),
        )
    }

    fn categories() -> Vec<CategoryQuery> {
        vec![
            CategoryQuery::new("Pré-treinos", PRE_WORKOUT_URL),
            CategoryQuery::new("Proteínas", PROTEIN_URL),
        ]
    }

    #[test]
    fn duplicate_across_categories_keeps_first_category() {
        let page = FakePage::new()
            .with_page(
                PRE_WORKOUT_URL,
                listing(vec![
                    card("/products/horus-300g", "Horus 300g"),
                    card("/products/top-whey-900g", "Top Whey 900g"),
                ]),
            )
            .with_page(
                PROTEIN_URL,
                listing(vec![card("/products/horus-300g", "Horus 300g")]),
            );

        let stubs = client(&page).collect_urls(&categories()).unwrap();

        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].url, "https://maxtitanium.eu/products/horus-300g");
        assert_eq!(stubs[0].category, "Pré-treinos");
        assert_eq!(stubs[1].name, "Top Whey 900g");
        assert_eq!(page.navigations(), vec![PRE_WORKOUT_URL, PROTEIN_URL]);
    }

    #[test]
    fn category_without_grid_contributes_nothing() {
        let page = FakePage::new()
            .with_page(PRE_WORKOUT_URL, FakePage::document())
            .with_page(
                PROTEIN_URL,
                listing(vec![card("/products/top-whey-900g", "Top Whey 900g")]),
            );

        let stubs = client(&page).collect_urls(&categories()).unwrap();

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].category, "Proteínas");
    }

    #[test]
    fn unreachable_category_is_skipped() {
        let page = FakePage::new().with_page(
            PROTEIN_URL,
            listing(vec![card("/products/top-whey-900g", "Top Whey 900g")]),
        );

        let stubs = client(&page).collect_urls(&categories()).unwrap();

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].category, "Proteínas");
        assert_eq!(page.navigations(), vec![PRE_WORKOUT_URL, PROTEIN_URL]);
    }

    #[test]
    fn lost_session_ends_the_run() {
        let page = FakePage::new()
            .with_lost_session(PRE_WORKOUT_URL)
            .with_page(PROTEIN_URL, listing(Vec::new()));

        let result = client(&page).collect_urls(&categories());

        assert!(matches!(result, Err(RetailerError::SessionFailed(_))));
        assert_eq!(page.navigations(), vec![PRE_WORKOUT_URL]);
    }

    #[test]
    fn raised_stop_signal_interrupts_before_the_next_category() {
        let page = FakePage::new().with_page(PRE_WORKOUT_URL, listing(Vec::new()));
        let stop = StopSignal::new();
        stop.raise();
        let client = ListingClient::new(
            &page,
            Box::new(MaxTitanium::new()),
            CollectorConfig::immediate(),
            stop,
        );

        let result = client.collect_urls(&categories());

        assert!(matches!(result, Err(RetailerError::Interrupted(0))));
        assert!(page.navigations().is_empty());
    }
}
