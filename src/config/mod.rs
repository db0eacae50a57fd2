pub mod traits;
pub mod viewer;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use traits::ConfigSection;
pub use viewer::ViewerConfig;
