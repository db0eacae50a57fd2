mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{
    DatasetMetadata,
    RequiredColumn,
};
pub use validator::DataValidator;
