use super::layout::DualAxisLayout;
use super::summary::RunSummary;

/// Colour as plain RGB so the figure description stays independent of any drawing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const TAB_BLUE: Rgb = Rgb(31, 119, 180);
    pub const TAB_ORANGE: Rgb = Rgb(255, 127, 14);
    pub const TAB_GREEN: Rgb = Rgb(44, 160, 44);
    pub const TAB_RED: Rgb = Rgb(214, 39, 40);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GRAY: Rgb = Rgb(127, 127, 127);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    Score,
    Diversity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub scale: AxisScale,
    pub side: AxisSide,
    /// Visible range in data units. `None` lets the viewer autoscale.
    pub domain: Option<(f64, f64)>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

/// A polyline in data units, x = generation
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub axis: AxisId,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub stroke: StrokeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub axis: AxisId,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub shape: MarkerShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendGlyph {
    Line(StrokeStyle),
    Marker(MarkerShape),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub glyph: LegendGlyph,
}

/// One legend box, grouping the items drawn against one y axis
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSpec {
    pub axis: AxisId,
    pub corner: LegendCorner,
    pub entries: Vec<LegendEntry>,
}

/// Everything needed to draw the progress chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: AxisSpec,
    pub score_axis: AxisSpec,
    pub diversity_axis: AxisSpec,
    pub lines: Vec<LineSeries>,
    pub improvements: ScatterSeries,
    pub legends: Vec<LegendSpec>,
    pub layout: DualAxisLayout,
    pub summary: RunSummary,
}

impl ChartSpec {
    pub fn lines_on(&self, axis: AxisId) -> impl Iterator<Item = &LineSeries> {
        self.lines.iter().filter(move |line| line.axis == axis)
    }

    pub fn legend_for(&self, axis: AxisId) -> Option<&LegendSpec> {
        self.legends.iter().find(|legend| legend.axis == axis)
    }
}
