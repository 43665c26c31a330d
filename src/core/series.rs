use std::fmt;

use crate::core::{DataPoint, ValueRange};
use crate::error::ChartResult;

/// Capability set of a plotted dataset.
///
/// The coordinator only talks to series through this trait, so sparse or
/// streaming implementations can be registered next to [`LineSeries`].
///
/// [`LineSeries`]: crate::core::LineSeries
pub trait Series: fmt::Debug {
    /// Range spanned by the x values; [`ValueRange::EMPTY`] without data.
    fn x_range(&self) -> ValueRange;

    /// Range spanned by the y values; [`ValueRange::EMPTY`] without data.
    fn y_range(&self) -> ValueRange;

    /// Points whose x lies in the inclusive window, in drawing order.
    fn points_in_range(&self, x_min: f64, x_max: f64) -> Vec<DataPoint>;

    /// Points needed to draw the window: every point of a segment that
    /// overlaps `[x_min, x_max]`, so lines crossing a window edge keep their
    /// outside end. Defaults to [`Series::points_in_range`].
    fn points_for_window(&self, x_min: f64, x_max: f64) -> Vec<DataPoint> {
        self.points_in_range(x_min, x_max)
    }

    /// Interpolated y value at `x`, if the series can answer it.
    fn value_at(&self, x: f64) -> Option<f64>;

    fn insert_point(&mut self, point: DataPoint) -> ChartResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
