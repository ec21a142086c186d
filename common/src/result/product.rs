use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::get_current_time;

/// A product found on a listing page.
///
/// The absolute `url` is the identity of a stub: two stubs are equal when
/// their urls are equal, regardless of name or category.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProductStub {
    pub name: String,
    pub url: String,
    pub slug: String,
    pub category: String,
    pub collected_at: NaiveDateTime,
}

impl Hash for ProductStub {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl PartialEq for ProductStub {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for ProductStub {}

impl ProductStub {
    pub fn new(name: String, url: String, slug: String, category: String) -> Self {
        Self {
            name,
            url,
            slug,
            category,
            collected_at: get_current_time(),
        }
    }

    pub fn with_collected_at(mut self, collected_at: NaiveDateTime) -> Self {
        self.collected_at = collected_at;
        self
    }
}

/// The `(url, category)` pair the nutrition phase works from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductTarget {
    pub url: String,
    pub category: String,
}

impl From<&ProductStub> for ProductTarget {
    fn from(stub: &ProductStub) -> Self {
        Self {
            url: stub.url.clone(),
            category: stub.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubs_with_same_url_are_equal() {
        let first = ProductStub::new(
            "Top Whey".into(),
            "https://maxtitanium.eu/products/top-whey".into(),
            "top-whey".into(),
            "Proteínas".into(),
        );
        let second = ProductStub::new(
            "Top Whey 3W".into(),
            "https://maxtitanium.eu/products/top-whey".into(),
            "top-whey".into(),
            "Pré-treinos".into(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn target_from_stub_keeps_url_and_category() {
        let stub = ProductStub::new(
            "Horus".into(),
            "https://maxtitanium.eu/products/horus".into(),
            "horus".into(),
            "Pré-treinos".into(),
        );

        let target = ProductTarget::from(&stub);

        assert_eq!(target.url, stub.url);
        assert_eq!(target.category, "Pré-treinos");
    }
}
