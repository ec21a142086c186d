pub mod discovery;
pub mod errors;
pub mod launch;
pub mod session;
pub mod traits;
