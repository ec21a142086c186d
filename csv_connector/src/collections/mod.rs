pub(crate) mod nutrition;
pub(crate) mod product_targets;
pub(crate) mod product_urls;
