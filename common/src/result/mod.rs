pub mod nutrition;
pub mod product;
