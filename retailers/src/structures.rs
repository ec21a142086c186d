use crawler::traits::Query;

use crate::{assembler::CardLayout, locator::PanelTarget};

/// Everything site specific the collectors need: where to start, what to
/// wait for, and how cards and the nutrition panel are marked up.
pub trait Retailer {
    fn get_retailer_name(&self) -> &'static str;

    fn get_base_url(&self) -> &'static str;

    fn get_search_terms(&self) -> Vec<CategoryQuery>;

    /// Queries that must match, in order, before a listing page is read.
    fn get_listing_ready_queries(&self) -> Vec<Query>;

    fn get_card_query(&self) -> Query;

    fn get_card_layout(&self) -> CardLayout;

    /// The element whose presence means a product page has rendered.
    fn get_product_core_query(&self) -> Query;

    fn get_panel_target(&self) -> PanelTarget;
}

/// One category listing to crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub name: String,
    pub url: String,
}

impl CategoryQuery {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
