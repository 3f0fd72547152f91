pub mod cli;
pub mod config;
pub mod curve;
pub mod error;
pub mod feed;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod units;
pub mod validation;

pub use error::{Error, Result};
