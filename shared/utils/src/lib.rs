pub mod config;
pub mod logging;
pub mod error;

pub use config::*;
pub use logging::*;
pub use error::*;
