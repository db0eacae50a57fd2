mod app;
mod panels;
mod state;
mod widgets;

pub use app::EvoChartApp;

use crate::chart::ChartSpec;
use crate::config::ViewerConfig;
use crate::error::{ChartError, Result};
use eframe::NativeOptions;

/// Open the chart window and block until it is closed
pub fn run_viewer(chart: ChartSpec, config: ViewerConfig) -> Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([config.min_window_width, config.min_window_height])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    log::debug!("Opening viewer window");
    eframe::run_native(
        "evochart",
        native_options,
        Box::new(move |cc| Ok(Box::new(EvoChartApp::new(cc, chart, config)))),
    )
    .map_err(|e| ChartError::Viewer(e.to_string()))
}
