pub mod listing_client;
pub mod product_client;
