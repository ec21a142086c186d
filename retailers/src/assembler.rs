use std::collections::HashSet;

use common::result::product::ProductStub;
use crawler::traits::ElementHandle;
use tracing::{debug, trace};

use crate::utils::{
    conversions::{absolute_url, slug_from_url, slug_to_title},
    html::{element_extract_attr, element_to_text, extract_element_from_element},
};

/// Where things live inside one product card.
#[derive(Debug, Clone)]
pub struct CardLayout {
    /// Path fragment every product url contains, e.g. `/products/`.
    pub product_path: String,
    pub link_selector: String,
    pub title_selector: String,
    pub label_attribute: String,
}

/// Stubs built from one listing page plus the cards that had no product link.
#[derive(Debug, Default)]
pub struct Assembled {
    pub stubs: Vec<ProductStub>,
    pub skipped: usize,
}

/// Builds stubs from product cards. Cards without a product url are counted
/// as skipped, never reported as errors.
pub fn assemble<E: ElementHandle>(
    cards: &[E],
    category: &str,
    base_url: &str,
    layout: &CardLayout,
) -> Assembled {
    let mut assembled = Assembled::default();

    for (index, card) in cards.iter().enumerate() {
        match extract_stub(card, category, base_url, layout) {
            Some(stub) => {
                debug!("  {}. {}", assembled.stubs.len() + 1, stub.name);
                assembled.stubs.push(stub);
            }
            None => {
                trace!("Card {} has no product link", index + 1);
                assembled.skipped += 1;
            }
        }
    }

    assembled
}

fn extract_stub<E: ElementHandle>(
    card: &E,
    category: &str,
    base_url: &str,
    layout: &CardLayout,
) -> Option<ProductStub> {
    let link = extract_element_from_element(card, &layout.link_selector)?;
    let href = element_extract_attr(&link, "href")?;
    let url = absolute_url(base_url, &href)?;

    if !url.contains(layout.product_path.as_str()) {
        return None;
    }

    let slug = slug_from_url(&url, &layout.product_path).unwrap_or_default();

    // title link text, then the accessible label, then the slug
    let name = extract_element_from_element(card, &layout.title_selector)
        .and_then(|title| element_to_text(&title))
        .or_else(|| element_extract_attr(&link, &layout.label_attribute))
        .unwrap_or_else(|| slug_to_title(&slug));

    Some(ProductStub::new(name, url, slug, category.to_string()))
}

/// Folds several stub lists into one, keyed by url.
///
/// The first occurrence of a url wins (its category included) and
/// first-seen order is kept.
pub fn merge<I>(lists: I) -> Vec<ProductStub>
where
    I: IntoIterator<Item = Vec<ProductStub>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for stub in lists.into_iter().flatten() {
        if seen.insert(stub.url.clone()) {
            merged.push(stub);
        } else {
            debug!("Dropping duplicate {} ({})", stub.url, stub.category);
        }
    }

    merged
}
