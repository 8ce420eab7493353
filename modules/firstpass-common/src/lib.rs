pub mod config;
pub mod domain;
pub mod error;
pub mod types;

pub use config::{Config, SourceScoring};
pub use domain::*;
pub use error::FirstPassError;
pub use types::*;
