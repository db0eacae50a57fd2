use super::panels::{ChartPanel, StatusBar};
use super::state::AppState;
use crate::chart::ChartSpec;
use crate::config::ViewerConfig;

pub struct EvoChartApp {
    state: AppState,
    chart_panel: ChartPanel,
}

impl EvoChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: ChartSpec, config: ViewerConfig) -> Self {
        Self {
            chart_panel: ChartPanel::new(&config),
            state: AppState::new(chart, config),
        }
    }
}

impl eframe::App for EvoChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.config.show_summary {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                StatusBar::show(ui, &self.state.chart.summary);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_panel.show(ui, &self.state.chart);
        });
    }
}
