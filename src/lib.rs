pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod types;
pub mod ui;

pub use error::{ChartError, Result};
pub use types::{ImprovementPoint, Record};
