use tracing::{debug, trace, warn};

use crate::core::{
    Axis, AxisKind, ChartSize, DataPoint, Series, SeriesId, SeriesList, TickGenerator, ValueRange,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, Renderer, SeriesPolyline};

use super::{ChartConfig, project_points};

/// Owns the axis pair and the registered series of one chart.
///
/// Unpinned axis ranges always equal the union of the matching series ranges
/// (or `(0, 1)` without data). Every mutation goes through this type, which
/// refreshes ranges and axis factors before returning.
#[derive(Debug)]
pub struct ChartCoordinator {
    abscissa: Axis,
    ordinate: Axis,
    series: Vec<Box<dyn Series>>,
    ids: Vec<SeriesId>,
    next_id: usize,
    size: ChartSize,
}

impl ChartCoordinator {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let tick_generator = TickGenerator::new(config.minimal_label_space)?;
        let series: Vec<Box<dyn Series>> = Vec::new();

        let mut abscissa = Axis::new(AxisKind::Abscissa, config.x_scale, tick_generator, &series);
        let mut ordinate = Axis::new(AxisKind::Ordinate, config.y_scale, tick_generator, &series);
        if let Some(range) = config.x_range {
            abscissa.pin_range(range);
        }
        if let Some(range) = config.y_range {
            ordinate.pin_range(range);
        }
        abscissa.set_size(config.size.width);
        ordinate.set_size(config.size.height);

        debug!(
            width = config.size.width,
            height = config.size.height,
            "create chart coordinator"
        );
        Ok(Self {
            abscissa,
            ordinate,
            series,
            ids: Vec::new(),
            next_id: 0,
            size: config.size,
        })
    }

    #[must_use]
    pub fn size(&self) -> ChartSize {
        self.size
    }

    #[must_use]
    pub fn abscissa(&self) -> &Axis {
        &self.abscissa
    }

    #[must_use]
    pub fn ordinate(&self) -> &Axis {
        &self.ordinate
    }

    #[must_use]
    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::Abscissa => &self.abscissa,
            AxisKind::Ordinate => &self.ordinate,
        }
    }

    /// Mutable axis access for tick, label and scale policies.
    ///
    /// Range changes should go through [`ChartCoordinator::pin`] and
    /// [`ChartCoordinator::unpin`].
    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::Abscissa => &mut self.abscissa,
            AxisKind::Ordinate => &mut self.ordinate,
        }
    }

    /// Registers a series on top of the existing ones and refreshes ranges.
    pub fn add_series<S>(&mut self, series: S) -> SeriesId
    where
        S: Series + 'static,
    {
        self.add_boxed_series(Box::new(series))
    }

    pub fn add_boxed_series(&mut self, series: Box<dyn Series>) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        debug!(series = %id, points = series.len(), "add series");
        self.series.push(series);
        self.ids.push(id);
        self.refresh();
        id
    }

    pub fn remove_series(&mut self, id: SeriesId) -> ChartResult<Box<dyn Series>> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        let removed = self.series.remove(index);
        debug!(series = %id, remaining = self.series.len(), "remove series");
        self.refresh();
        Ok(removed)
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&dyn Series> {
        let index = self.index_of(id).ok()?;
        Some(self.series[index].as_ref())
    }

    /// Direct series access. Call [`ChartCoordinator::refresh`] after mutating
    /// through it so axis ranges follow the new data.
    pub fn series_mut(&mut self, id: SeriesId) -> Option<&mut Box<dyn Series>> {
        let index = self.index_of(id).ok()?;
        self.series.get_mut(index)
    }

    /// Registered series ids in layer order.
    #[must_use]
    pub fn series_ids(&self) -> &[SeriesId] {
        &self.ids
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Inserts a point into a registered series and refreshes ranges.
    pub fn insert_point(&mut self, id: SeriesId, point: DataPoint) -> ChartResult<()> {
        let index = self.index_of(id)?;
        self.series[index].insert_point(point)?;
        trace!(series = %id, x = point.x, y = point.y, "insert point");
        self.refresh();
        Ok(())
    }

    /// Recomputes unpinned axis ranges from the registered series and
    /// relayouts both axes.
    pub fn refresh(&mut self) {
        self.abscissa.update_range(&self.series);
        self.ordinate.update_range(&self.series);
        self.relayout();
    }

    /// Forwards new surface extents to the abscissa and ordinate.
    pub fn set_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let size = ChartSize::new(width, height);
        if !size.is_valid() {
            warn!(width, height, "rejecting invalid chart size");
            return Err(ChartError::InvalidSize { width, height });
        }
        self.size = size;
        debug!(width, height, "resize chart");
        self.relayout();
        Ok(())
    }

    /// Pins an axis range; it stays fixed until [`ChartCoordinator::unpin`].
    ///
    /// Inverted bounds are swapped; non-finite bounds are rejected.
    pub fn pin(&mut self, kind: AxisKind, range: ValueRange) -> ChartResult<()> {
        let range = ValueRange::finite(range.min, range.max).inspect_err(|_| {
            warn!(axis = ?kind, min = range.min, max = range.max, "rejecting non-finite pin");
        })?;
        debug!(axis = ?kind, min = range.min, max = range.max, "pin axis range");
        self.axis_mut(kind).pin_range(range);
        self.relayout();
        Ok(())
    }

    /// Drops a pinned range and returns to the union of series ranges.
    pub fn unpin(&mut self, kind: AxisKind) {
        debug!(axis = ?kind, "unpin axis range");
        let (axis, series) = self.axis_and_series_mut(kind);
        axis.unpin_range(series);
        self.relayout();
    }

    /// Maps a data point to drawing coordinates.
    #[must_use]
    pub fn transform_point(&self, point: DataPoint) -> (f64, f64) {
        (
            self.abscissa.transform_value(point.x),
            self.ordinate.transform_value(point.y),
        )
    }

    /// Maps drawing coordinates back to a data point.
    #[must_use]
    pub fn transform_coordinate(&self, coordinate: (f64, f64)) -> DataPoint {
        DataPoint::new(
            self.abscissa.transform_coordinate(coordinate.0),
            self.ordinate.transform_coordinate(coordinate.1),
        )
    }

    /// Projected polyline of the visible x range, including the nearest
    /// point beyond each edge so segments crossing the edge stay drawn.
    pub fn polyline(&self, id: SeriesId) -> ChartResult<SeriesPolyline> {
        let index = self.index_of(id)?;
        Ok(self.polyline_at(index))
    }

    #[must_use]
    pub fn polylines(&self) -> Vec<SeriesPolyline> {
        (0..self.series.len())
            .map(|index| self.polyline_at(index))
            .collect()
    }

    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        ChartFrame {
            size: self.size,
            abscissa: self.abscissa.geometry(),
            ordinate: self.ordinate.geometry(),
            series: self.polylines(),
        }
    }

    pub fn frame_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.frame())?)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.frame();
        trace!(
            polylines = frame.series.len(),
            ticks = frame.tick_count(),
            "render frame"
        );
        renderer.render(&frame)
    }

    fn polyline_at(&self, index: usize) -> SeriesPolyline {
        let range = self.abscissa.range();
        let points = self.series[index].points_for_window(range.min, range.max);
        SeriesPolyline {
            id: self.ids[index],
            points: project_points(
                &points,
                self.abscissa.transform(),
                self.ordinate.transform(),
            ),
        }
    }

    fn relayout(&mut self) {
        self.abscissa.set_size(self.size.width);
        self.ordinate.set_size(self.size.height);
        trace!(
            x_min = self.abscissa.range().min,
            x_max = self.abscissa.range().max,
            y_min = self.ordinate.range().min,
            y_max = self.ordinate.range().max,
            x_factor = self.abscissa.factor(),
            y_factor = self.ordinate.factor(),
            "relayout axes"
        );
    }

    fn axis_and_series_mut(&mut self, kind: AxisKind) -> (&mut Axis, &SeriesList) {
        let axis = match kind {
            AxisKind::Abscissa => &mut self.abscissa,
            AxisKind::Ordinate => &mut self.ordinate,
        };
        (axis, self.series.as_slice())
    }

    fn index_of(&self, id: SeriesId) -> ChartResult<usize> {
        self.ids
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or(ChartError::UnknownSeries(id))
    }
}
