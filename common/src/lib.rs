pub mod config;
pub mod constants;
pub mod result;
pub mod stop;
pub mod utils;
