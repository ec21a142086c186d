pub mod mapping;
pub mod parser;
pub mod table;
