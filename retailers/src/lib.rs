pub mod assembler;
pub mod clients;
pub mod errors;
pub mod locator;
pub mod nutrition;
pub mod retailers;
pub mod structures;
pub(crate) mod utils;

#[cfg(test)]
mod testing;
