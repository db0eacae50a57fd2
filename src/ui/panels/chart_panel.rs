use crate::chart::layout::{format_diversity, format_score, DIVERSITY_TICK_STEP};
use crate::chart::{AxisId, ChartSpec, DualAxisLayout, LegendCorner, StrokeStyle};
use crate::config::ViewerConfig;
use crate::ui::widgets::{color32, LegendBox};
use egui_plot::{
    log_grid_spacer, AxisHints, Corner, GridInput, GridMark, HPlacement, Legend, Line, LineStyle,
    MarkerShape, Plot, Points,
};

/// Draws a `ChartSpec` as one plot with a log score axis on the left and
/// the diversity axis on the right.
pub struct ChartPanel {
    line_width: f32,
    marker_radius: f32,
}

impl ChartPanel {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            line_width: config.line_width,
            marker_radius: config.marker_radius,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, chart: &ChartSpec) {
        ui.vertical_centered(|ui| {
            ui.heading(&chart.title);
        });

        let layout = chart.layout;
        // Items named in the built-in legend; every other legend is painted over the plot
        let primary = chart.legend_for(AxisId::Score);
        let in_primary = |label: &str| {
            primary.is_some_and(|legend| legend.entries.iter().any(|e| e.label == label))
        };

        let score_axis = AxisHints::new_y()
            .label(egui::RichText::new(&chart.score_axis.label).color(color32(chart.score_axis.color)))
            .formatter(move |mark, _range| {
                if layout.diversity_tick_at(mark.value).is_some() {
                    String::new()
                } else {
                    format_score(layout.plot_to_score(mark.value))
                }
            });
        let diversity_axis = AxisHints::new_y()
            .label(
                egui::RichText::new(&chart.diversity_axis.label)
                    .color(color32(chart.diversity_axis.color)),
            )
            .placement(HPlacement::Right)
            .formatter(move |mark, _range| {
                layout
                    .diversity_tick_at(mark.value)
                    .map(format_diversity)
                    .unwrap_or_default()
            });

        // Score marks follow the log10 plot units; diversity marks are added at every 10 %
        let score_spacer = log_grid_spacer(10);

        let mut legend = Legend::default();
        if let Some(primary) = primary {
            legend = legend.position(corner(primary.corner));
        }

        let response = Plot::new("progress_chart")
            .legend(legend)
            .x_axis_label(chart.x_axis.label.clone())
            .custom_y_axes(vec![score_axis, diversity_axis])
            .y_grid_spacer(move |input: GridInput| {
                let bounds = input.bounds;
                let mut marks: Vec<GridMark> = score_spacer(input)
                    .into_iter()
                    .filter(|mark| layout.diversity_tick_at(mark.value).is_none())
                    .collect();
                marks.extend(diversity_grid(&layout, bounds));
                marks
            })
            .include_y(layout.log_min)
            .include_y(layout.log_max)
            .label_formatter(move |name, value| {
                let header = if name.is_empty() { String::new() } else { format!("{}\n", name) };
                format!(
                    "{}generation {:.0}\nscore {}\ndiversity {:.1}%",
                    header,
                    value.x,
                    format_score(layout.plot_to_score(value.y)),
                    layout.plot_to_diversity(value.y)
                )
            })
            .show(ui, |plot_ui| {
                for line in &chart.lines {
                    let name = if in_primary(&line.name) { line.name.as_str() } else { "" };
                    let style = match line.stroke {
                        StrokeStyle::Solid => LineStyle::Solid,
                        StrokeStyle::Dashed => LineStyle::dashed_dense(),
                    };
                    plot_ui.line(
                        Line::new(name, plot_points(&line.points, line.axis, &layout))
                            .color(color32(line.color))
                            .width(self.line_width)
                            .style(style),
                    );
                }

                let markers = &chart.improvements;
                let name = if in_primary(&markers.name) { markers.name.as_str() } else { "" };
                plot_ui.points(
                    Points::new(name, plot_points(&markers.points, markers.axis, &layout))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(self.marker_radius)
                        .color(color32(markers.color)),
                );
            });

        for secondary in chart.legends.iter().filter(|l| l.axis != AxisId::Score) {
            LegendBox::paint(ui, response.response.rect, secondary, self.marker_radius);
        }
    }
}

/// Map data-space points into the shared plot space of the axis they belong to
fn plot_points(points: &[[f64; 2]], axis: AxisId, layout: &DualAxisLayout) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|&[x, y]| match axis {
            AxisId::Score => [x, layout.score_to_plot(y)],
            AxisId::Diversity => [x, layout.diversity_to_plot(y)],
        })
        .collect()
}

/// Grid marks for the diversity ticks that fall inside the visible y range
fn diversity_grid(layout: &DualAxisLayout, bounds: (f64, f64)) -> Vec<GridMark> {
    let (lo, hi) = bounds;
    let step_size = layout.span() * DIVERSITY_TICK_STEP / 100.0;
    layout
        .diversity_ticks()
        .into_iter()
        .filter(|y| (lo..=hi).contains(y))
        .map(|value| GridMark { value, step_size })
        .collect()
}

fn corner(corner: LegendCorner) -> Corner {
    match corner {
        LegendCorner::UpperLeft => Corner::LeftTop,
        LegendCorner::UpperRight => Corner::RightTop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_points_share_one_vertical_extent() {
        let layout = DualAxisLayout { log_min: 0.0, log_max: 2.0 };

        let scores = plot_points(&[[0.0, 1.0], [1.0, 100.0]], AxisId::Score, &layout);
        let diversity = plot_points(&[[0.0, 0.0], [1.0, 100.0]], AxisId::Diversity, &layout);

        assert!((scores[0][1] - 0.0).abs() < 1e-9);
        assert!((scores[1][1] - 2.0).abs() < 1e-9);
        assert!((diversity[0][1] - 0.0).abs() < 1e-9);
        assert!((diversity[1][1] - 2.0).abs() < 1e-9);
        assert_eq!(scores[1][0], 1.0);
    }

    #[test]
    fn test_diversity_grid_lands_on_whole_tens() {
        let layout = DualAxisLayout { log_min: 0.6, log_max: 1.9 };

        let marks = diversity_grid(&layout, (0.0, 3.0));
        assert_eq!(marks.len(), 11);
        for mark in &marks {
            let pct = layout.plot_to_diversity(mark.value);
            assert!((pct - (pct / 10.0).round() * 10.0).abs() < 1e-6, "tick at {}%", pct);
            assert!(!format_diversity(layout.diversity_tick_at(mark.value).unwrap()).is_empty());
        }

        // Zoomed in: only ticks inside the visible range
        let visible = (layout.diversity_to_plot(25.0), layout.diversity_to_plot(55.0));
        let zoomed = diversity_grid(&layout, visible);
        let labels: Vec<String> = zoomed
            .iter()
            .map(|m| format_diversity(layout.diversity_tick_at(m.value).unwrap()))
            .collect();
        assert_eq!(labels, vec!["30%", "40%", "50%"]);
    }

    #[test]
    fn test_improvement_markers_land_on_best_line() {
        let records = vec![
            crate::types::Record::new(0, 10.0, 5.0, 7.0, 0.5),
            crate::types::Record::new(1, 10.0, 4.0, 6.0, 0.4),
            crate::types::Record::new(2, 15.0, 4.0, 9.0, 0.6),
        ];
        let chart = crate::chart::compose(&records).unwrap();

        let best = plot_points(&chart.lines[0].points, AxisId::Score, &chart.layout);
        let markers = plot_points(&chart.improvements.points, AxisId::Score, &chart.layout);
        for marker in markers {
            assert!(best.contains(&marker));
        }
    }
}
