pub mod config;
pub mod error;
pub mod filter;
pub mod har;
pub mod logging;

pub use error::ScanError;
