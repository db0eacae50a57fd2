use super::traits::ConfigSection;
use crate::chart::DEFAULT_TITLE;
use crate::error::ChartError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub show_summary: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: 1200.0,
            window_height: 700.0,
            min_window_width: 600.0,
            min_window_height: 400.0,
            line_width: 1.5,
            marker_radius: 4.0,
            show_summary: true,
        }
    }
}

impl ConfigSection for ViewerConfig {
    fn section_name() -> &'static str {
        "viewer"
    }

    fn validate(&self) -> Result<(), ChartError> {
        if self.title.trim().is_empty() {
            return Err(ChartError::Configuration(
                "Chart title must not be empty".to_string()
            ));
        }
        if self.min_window_width <= 0.0 || self.min_window_height <= 0.0 {
            return Err(ChartError::Configuration(
                "Minimum window size must be positive".to_string()
            ));
        }
        if self.window_width < self.min_window_width || self.window_height < self.min_window_height {
            return Err(ChartError::Configuration(format!(
                "Window size {}x{} is below the minimum {}x{}",
                self.window_width, self.window_height, self.min_window_width, self.min_window_height
            )));
        }
        if self.line_width <= 0.0 {
            return Err(ChartError::Configuration(
                "Line width must be positive".to_string()
            ));
        }
        if self.marker_radius <= 0.0 {
            return Err(ChartError::Configuration(
                "Marker radius must be positive".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_window_below_minimum() {
        let config = ViewerConfig {
            window_width: 300.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChartError::Configuration(_))));
    }

    #[test]
    fn test_blank_title() {
        let config = ViewerConfig {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_marker_radius_positive() {
        let config = ViewerConfig {
            marker_radius: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
