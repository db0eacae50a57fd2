pub mod connectors;

pub use connectors::{CsvConnector, DatasetMetadata};

use crate::error::Result;
use crate::types::Record;
use std::path::Path;

/// Read a run log from disk into records in file order
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    CsvConnector::load_records(path)
}
