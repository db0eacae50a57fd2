pub mod legend_box;

pub use legend_box::LegendBox;

use crate::chart::Rgb;
use egui::Color32;

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
