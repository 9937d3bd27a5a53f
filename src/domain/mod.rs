//! Domain - configuration, validation errors and region labels

pub mod config;
pub mod error;
pub mod region;

pub use config::PileConfig;
pub use error::ConfigError;
pub use region::Region;
