use crate::chart::ChartSpec;
use crate::config::ViewerConfig;

/// Everything the viewer draws from. Built once, read on every frame.
pub struct AppState {
    pub chart: ChartSpec,
    pub config: ViewerConfig,
}

impl AppState {
    pub fn new(chart: ChartSpec, config: ViewerConfig) -> Self {
        Self { chart, config }
    }
}
