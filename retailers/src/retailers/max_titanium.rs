use common::constants::{BASE_URL, DEFAULT_CATEGORIES, NUTRITION_PANEL_TITLE};
use crawler::traits::Query;

use crate::{
    assembler::CardLayout,
    locator::PanelTarget,
    structures::{CategoryQuery, Retailer},
};

const GRID_SELECTOR: &str = "#ProductsList";
const GRID_CARD_SELECTOR: &str = "#ProductsList .product-card";
const CARD_SELECTOR: &str = "#ProductsList .f-column .product-card";

const PRODUCT_PATH: &str = "/products/";
const LINK_SELECTOR: &str = "a[href*='/products/']";
const TITLE_SELECTOR: &str = "h3.product-card__title a";
const LABEL_ATTRIBUTE: &str = "aria-label";

const CORE_SELECTOR: &str = "h1";

const PANEL_HEADING_CLASS: &str = " font-heading h5 inline-richtext";
const PANEL_CONTROL_TAG: &str = "summary";
const PANEL_CONTROL_CLASS: &str =
    "accordion-details__summary flex items-center justify-between focus-inset";

/// Shopify storefront of Max Titanium Europa.
pub struct MaxTitanium;

impl Default for MaxTitanium {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxTitanium {
    pub fn new() -> Self {
        Self {}
    }
}

impl Retailer for MaxTitanium {
    fn get_retailer_name(&self) -> &'static str {
        "Max Titanium Europa"
    }

    fn get_base_url(&self) -> &'static str {
        BASE_URL
    }

    fn get_search_terms(&self) -> Vec<CategoryQuery> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, url)| CategoryQuery::new(*name, *url))
            .collect()
    }

    fn get_listing_ready_queries(&self) -> Vec<Query> {
        vec![Query::css(GRID_SELECTOR), Query::css(GRID_CARD_SELECTOR)]
    }

    fn get_card_query(&self) -> Query {
        Query::css(CARD_SELECTOR)
    }

    fn get_card_layout(&self) -> CardLayout {
        CardLayout {
            product_path: PRODUCT_PATH.into(),
            link_selector: LINK_SELECTOR.into(),
            title_selector: TITLE_SELECTOR.into(),
            label_attribute: LABEL_ATTRIBUTE.into(),
        }
    }

    fn get_product_core_query(&self) -> Query {
        Query::css(CORE_SELECTOR)
    }

    fn get_panel_target(&self) -> PanelTarget {
        PanelTarget {
            phrase: NUTRITION_PANEL_TITLE.into(),
            heading_class: PANEL_HEADING_CLASS.into(),
            control_tag: PANEL_CONTROL_TAG.into(),
            control_class: PANEL_CONTROL_CLASS.into(),
        }
    }
}
