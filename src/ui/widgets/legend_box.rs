use crate::chart::{LegendCorner, LegendGlyph, LegendSpec, StrokeStyle};
use egui::{pos2, vec2, Rect, Shape, Stroke};

use super::color32;

const PADDING: f32 = 6.0;
const MARGIN: f32 = 8.0;
const SWATCH: f32 = 22.0;
const GAP: f32 = 6.0;

/// A legend painted on top of the plot area.
/// The plot widget only has one built-in legend, so secondary axis groups use this.
pub struct LegendBox;

impl LegendBox {
    pub fn paint(ui: &egui::Ui, plot_rect: Rect, legend: &LegendSpec, marker_radius: f32) {
        if legend.entries.is_empty() {
            return;
        }

        let painter = ui.painter_at(plot_rect);
        let font = egui::TextStyle::Body.resolve(ui.style());
        let text_color = ui.visuals().text_color();

        let galleys: Vec<_> = legend
            .entries
            .iter()
            .map(|entry| painter.layout_no_wrap(entry.label.clone(), font.clone(), text_color))
            .collect();

        let row_height = galleys.iter().map(|g| g.size().y).fold(0.0, f32::max);
        let text_width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);
        let size = vec2(
            PADDING * 2.0 + SWATCH + GAP + text_width,
            PADDING * 2.0 + row_height * galleys.len() as f32,
        );

        let origin = match legend.corner {
            LegendCorner::UpperLeft => pos2(plot_rect.left() + MARGIN, plot_rect.top() + MARGIN),
            LegendCorner::UpperRight => {
                pos2(plot_rect.right() - MARGIN - size.x, plot_rect.top() + MARGIN)
            }
        };
        let frame = Rect::from_min_size(origin, size);

        painter.rect_filled(frame, 3.0, ui.visuals().extreme_bg_color.gamma_multiply(0.85));

        for (i, (entry, galley)) in legend.entries.iter().zip(galleys).enumerate() {
            let y = frame.top() + PADDING + row_height * (i as f32 + 0.5);
            let x = frame.left() + PADDING;
            let color = color32(entry.color);

            match entry.glyph {
                LegendGlyph::Line(StrokeStyle::Solid) => {
                    painter.line_segment([pos2(x, y), pos2(x + SWATCH, y)], Stroke::new(2.0, color));
                }
                LegendGlyph::Line(StrokeStyle::Dashed) => {
                    painter.extend(Shape::dashed_line(
                        &[pos2(x, y), pos2(x + SWATCH, y)],
                        Stroke::new(2.0, color),
                        5.0,
                        3.0,
                    ));
                }
                LegendGlyph::Marker(_) => {
                    painter.circle_filled(pos2(x + SWATCH / 2.0, y), marker_radius, color);
                }
            }

            let text_pos = pos2(x + SWATCH + GAP, y - galley.size().y / 2.0);
            painter.galley(text_pos, galley, text_color);
        }
    }
}
