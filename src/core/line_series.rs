use serde::Serialize;
use tracing::{trace, warn};

use crate::core::{DataPoint, Series, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Ordered point collection with incrementally maintained ranges.
///
/// Points keep insertion order, which is also the polyline drawing order.
/// Both ranges are folded on every insert, so they stay correct even when
/// points arrive out of x order; `sorted_by_x` records whether they did,
/// which enables binary-search windowing and interpolation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    points: Vec<DataPoint>,
    x_range: ValueRange,
    y_range: ValueRange,
    sorted_by_x: bool,
}

impl Default for LineSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            x_range: ValueRange::EMPTY,
            y_range: ValueRange::EMPTY,
            sorted_by_x: true,
        }
    }

    /// Builds a series by inserting `points` in order.
    pub fn with_points<I>(points: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DataPoint>,
    {
        let mut series = Self::new();
        for point in points {
            series.insert_point(point)?;
        }
        Ok(series)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_sorted_by_x(&self) -> bool {
        self.sorted_by_x
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // Index span of the points with `low <= x <= high`; sorted series only.
    fn sorted_window(&self, low: f64, high: f64) -> (usize, usize) {
        let start = self.points.partition_point(|point| point.x < low);
        let end = self.points.partition_point(|point| point.x <= high);
        (start, end.max(start))
    }
}

fn window_bounds(x_min: f64, x_max: f64) -> Option<(f64, f64)> {
    if x_min.is_nan() || x_max.is_nan() {
        return None;
    }
    Some((x_min.min(x_max), x_min.max(x_max)))
}

impl Series for LineSeries {
    fn x_range(&self) -> ValueRange {
        self.x_range
    }

    fn y_range(&self) -> ValueRange {
        self.y_range
    }

    fn points_in_range(&self, x_min: f64, x_max: f64) -> Vec<DataPoint> {
        let Some((low, high)) = window_bounds(x_min, x_max) else {
            return Vec::new();
        };

        if self.sorted_by_x {
            let (start, end) = self.sorted_window(low, high);
            if start >= end {
                return Vec::new();
            }
            return self.points[start..end].to_vec();
        }

        self.points
            .iter()
            .copied()
            .filter(|point| point.x >= low && point.x <= high)
            .collect()
    }

    fn points_for_window(&self, x_min: f64, x_max: f64) -> Vec<DataPoint> {
        let Some((low, high)) = window_bounds(x_min, x_max) else {
            return Vec::new();
        };

        if self.sorted_by_x {
            let (start, end) = self.sorted_window(low, high);
            // Nothing left or right of the data overlaps the window.
            if start == end && (start == 0 || end == self.points.len()) {
                return Vec::new();
            }
            let first = start.saturating_sub(1);
            let last = (end + 1).min(self.points.len());
            return self.points[first..last].to_vec();
        }

        let overlaps =
            |a: DataPoint, b: DataPoint| a.x.min(b.x) <= high && a.x.max(b.x) >= low;
        self.points
            .iter()
            .enumerate()
            .filter(|(index, point)| {
                if low <= point.x && point.x <= high {
                    return true;
                }
                let before = index
                    .checked_sub(1)
                    .and_then(|previous| self.points.get(previous))
                    .is_some_and(|previous| overlaps(*previous, **point));
                let after = self
                    .points
                    .get(index + 1)
                    .is_some_and(|next| overlaps(**point, *next));
                before || after
            })
            .map(|(_, point)| *point)
            .collect()
    }

    fn value_at(&self, x: f64) -> Option<f64> {
        if !self.sorted_by_x || !x.is_finite() || !self.x_range.contains(x) {
            return None;
        }

        let index = self.points.partition_point(|point| point.x < x);
        let right = *self.points.get(index)?;
        if right.x == x {
            return Some(right.y);
        }
        let left = self.points[index.checked_sub(1)?];
        let ratio = (x - left.x) / (right.x - left.x);
        Some(left.y + ratio * (right.y - left.y))
    }

    fn insert_point(&mut self, point: DataPoint) -> ChartResult<()> {
        if !point.is_finite() {
            warn!(x = point.x, y = point.y, "rejecting non-finite series point");
            return Err(ChartError::InvalidData(
                "series point must be finite".to_owned(),
            ));
        }

        if let Some(last) = self.points.last() {
            if point.x < last.x {
                self.sorted_by_x = false;
            }
        }
        self.points.push(point);
        self.x_range.include(point.x);
        self.y_range.include(point.y);
        trace!(count = self.points.len(), "insert series point");
        Ok(())
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
