pub mod axis;
pub mod axis_policy;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod setting;
pub mod tick_generator;
pub mod time_labels;
pub mod types;
pub mod value_range;

pub use axis::{
    Axis, AxisGeometry, AxisKind, AxisTick, AxisTransform, SeriesList, TICK_MARK_LENGTH,
};
pub use axis_policy::{LabelMap, Labels, Tickmarks};
pub use line_series::LineSeries;
pub use scale::Scale;
pub use series::Series;
pub use setting::Setting;
pub use tick_generator::{DEFAULT_MINIMAL_SPACING, MAX_INTERVAL_COUNT, TickGenerator};
pub use time_labels::TimeLabelPattern;
pub use types::{ChartSize, DataPoint, LineSegment, SeriesId};
pub use value_range::ValueRange;
