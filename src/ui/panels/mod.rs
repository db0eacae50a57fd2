pub mod chart_panel;
pub mod status_bar;

pub use chart_panel::ChartPanel;
pub use status_bar::StatusBar;
