use crate::error::{ChartError, Result};
use crate::types::Record;
use super::figure::{
    AxisId, AxisScale, AxisSide, AxisSpec, ChartSpec, LegendCorner, LegendEntry, LegendGlyph,
    LegendSpec, LineSeries, MarkerShape, Rgb, ScatterSeries, StrokeStyle,
};
use super::improvement;
use super::layout::{DualAxisLayout, DIVERSITY_DOMAIN};
use super::summary::RunSummary;

pub const DEFAULT_TITLE: &str = "Progress of Genetic Algorithm Over Generations (Log Scale)";

/// Builds the dual-axis progress chart from a run log
#[derive(Debug, Clone)]
pub struct ChartComposer {
    title: String,
}

impl Default for ChartComposer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ChartComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn compose(&self, records: &[Record]) -> Result<ChartSpec> {
        let improvements = improvement::extract(records)?;
        Self::check_log_domain(records)?;

        let layout = DualAxisLayout::fit(
            records
                .iter()
                .flat_map(|r| [r.best_solution, r.worst_solution, r.average_score]),
        )
        .ok_or(ChartError::EmptyInput)?;

        let summary = RunSummary::from_run(records, &improvements).ok_or(ChartError::EmptyInput)?;

        let lines = vec![
            Self::line(records, "Best Solution", AxisId::Score, Rgb::TAB_BLUE, StrokeStyle::Solid, |r| {
                r.best_solution
            }),
            Self::line(records, "Worst Solution", AxisId::Score, Rgb::TAB_ORANGE, StrokeStyle::Solid, |r| {
                r.worst_solution
            }),
            Self::line(records, "Average Score", AxisId::Score, Rgb::TAB_GREEN, StrokeStyle::Dashed, |r| {
                r.average_score
            }),
            Self::line(records, "Diversity (%)", AxisId::Diversity, Rgb::TAB_RED, StrokeStyle::Solid, |r| {
                r.diversity_pct()
            }),
        ];

        let improvements = ScatterSeries {
            name: "Improvement".to_string(),
            axis: AxisId::Score,
            points: improvements
                .iter()
                .map(|p| [p.generation as f64, p.best_solution])
                .collect(),
            color: Rgb::BLUE,
            shape: MarkerShape::Circle,
        };

        let legends = vec![
            Self::legend(&lines, &improvements, AxisId::Score, LegendCorner::UpperLeft),
            Self::legend(&lines, &improvements, AxisId::Diversity, LegendCorner::UpperRight),
        ];

        log::info!(
            "Composed chart: {} records, {} improvement markers, score domain {:?}",
            records.len(),
            improvements.points.len(),
            layout.score_domain()
        );

        Ok(ChartSpec {
            title: self.title.clone(),
            x_axis: AxisSpec {
                label: "Generation".to_string(),
                scale: AxisScale::Linear,
                side: AxisSide::Bottom,
                domain: None,
                color: Rgb::GRAY,
            },
            score_axis: AxisSpec {
                label: "Score (log scale)".to_string(),
                scale: AxisScale::Log10,
                side: AxisSide::Left,
                domain: Some(layout.score_domain()),
                color: Rgb::TAB_BLUE,
            },
            diversity_axis: AxisSpec {
                label: "Diversity (%)".to_string(),
                scale: AxisScale::Linear,
                side: AxisSide::Right,
                domain: Some(DIVERSITY_DOMAIN),
                color: Rgb::TAB_RED,
            },
            lines,
            improvements,
            legends,
            layout,
            summary,
        })
    }

    /// Every value headed for the log axis must be finite and > 0
    fn check_log_domain(records: &[Record]) -> Result<()> {
        for record in records {
            let scores = [
                ("best_solution", record.best_solution),
                ("worst_solution", record.worst_solution),
                ("average_score", record.average_score),
            ];
            for (series, value) in scores {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ChartError::NonPositiveScore {
                        series,
                        generation: record.generation,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    fn line<F>(
        records: &[Record],
        name: &str,
        axis: AxisId,
        color: Rgb,
        stroke: StrokeStyle,
        value: F,
    ) -> LineSeries
    where
        F: Fn(&Record) -> f64,
    {
        LineSeries {
            name: name.to_string(),
            axis,
            points: records
                .iter()
                .map(|r| [r.generation as f64, value(r)])
                .collect(),
            color,
            stroke,
        }
    }

    fn legend(
        lines: &[LineSeries],
        markers: &ScatterSeries,
        axis: AxisId,
        corner: LegendCorner,
    ) -> LegendSpec {
        let mut entries: Vec<LegendEntry> = lines
            .iter()
            .filter(|line| line.axis == axis)
            .map(|line| LegendEntry {
                label: line.name.clone(),
                color: line.color,
                glyph: LegendGlyph::Line(line.stroke),
            })
            .collect();

        if markers.axis == axis {
            entries.push(LegendEntry {
                label: markers.name.clone(),
                color: markers.color,
                glyph: LegendGlyph::Marker(markers.shape),
            });
        }

        LegendSpec { axis, corner, entries }
    }
}

/// Compose a chart with the default title
pub fn compose(records: &[Record]) -> Result<ChartSpec> {
    ChartComposer::default().compose(records)
}
