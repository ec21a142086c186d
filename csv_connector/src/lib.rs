mod collections;
pub mod connector;
pub mod errors;
pub mod sink;

pub use collections::{nutrition::NutritionRow, product_urls::ProductUrlRow};
