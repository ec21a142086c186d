pub mod cli;
pub mod errors;
pub mod logger;
pub mod phases;
