use crate::chart::RunSummary;

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, summary: &RunSummary) {
        ui.horizontal(|ui| {
            ui.label(format!("Generations: {}", summary.num_records));
            ui.separator();
            ui.label(format!("Best: {:.4}", summary.final_best));
            if summary.peak_best > summary.final_best {
                ui.label(format!("(peak {:.4})", summary.peak_best));
            }
            ui.separator();
            ui.label(format!(
                "Improvements: {} (last at generation {})",
                summary.improvement_count, summary.last_improvement_generation
            ));
            ui.separator();
            ui.label(format!("Stagnant for: {}", summary.stagnation));
            ui.separator();
            ui.label(format!("Diversity: {:.1}%", summary.final_diversity_pct));
        });
    }
}
