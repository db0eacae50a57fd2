pub mod composer;
pub mod figure;
pub mod improvement;
pub mod layout;
pub mod summary;

pub use composer::{compose, ChartComposer, DEFAULT_TITLE};
pub use figure::{
    AxisId, AxisScale, AxisSide, AxisSpec, ChartSpec, LegendCorner, LegendEntry, LegendGlyph,
    LegendSpec, LineSeries, MarkerShape, Rgb, ScatterSeries, StrokeStyle,
};
pub use improvement::extract;
pub use layout::{DualAxisLayout, DIVERSITY_DOMAIN};
pub use summary::RunSummary;
