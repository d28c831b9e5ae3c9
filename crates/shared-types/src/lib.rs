pub mod config;
pub mod error;
pub mod roster;

pub use config::*;
pub use error::*;
pub use roster::*;
