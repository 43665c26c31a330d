use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::primitives::guarded_span;
use crate::core::{
    Labels, LineSegment, Scale, Series, Setting, TickGenerator, Tickmarks, ValueRange,
};

/// Registered series as seen by axis range fallbacks.
pub type SeriesList = [Box<dyn Series>];

/// Half length of a tick mark, measured across the axis line.
pub const TICK_MARK_LENGTH: f64 = 4.0;

/// Which data dimension an axis represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Horizontal axis, fed by series x ranges.
    Abscissa,
    /// Vertical axis, fed by series y ranges.
    Ordinate,
}

impl AxisKind {
    #[must_use]
    pub fn series_range(self, series: &dyn Series) -> ValueRange {
        match self {
            Self::Abscissa => series.x_range(),
            Self::Ordinate => series.y_range(),
        }
    }

    /// Union of this dimension over all series, or `(0, 1)` without data.
    #[must_use]
    pub fn merged_range(self, series: &SeriesList) -> ValueRange {
        series
            .iter()
            .fold(ValueRange::EMPTY, |acc, current| {
                acc.merge(self.series_range(current.as_ref()))
            })
            .or(ValueRange::default())
    }
}

/// Copyable snapshot of an axis mapping, usable off the axis itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale: Scale,
    pub offset: f64,
    pub factor: f64,
}

impl AxisTransform {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        self.scale.transform_value(value, self.offset) * self.factor
    }

    /// Inverse of [`AxisTransform::apply`]. A zero factor maps every
    /// coordinate back to `offset`.
    #[must_use]
    pub fn invert(self, coordinate: f64) -> f64 {
        if self.factor == 0.0 || !self.factor.is_finite() {
            return self.offset;
        }
        self.scale
            .transform_coordinate(coordinate / self.factor, self.offset)
    }
}

/// One labelled tick, positioned in axis coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: Option<String>,
}

/// Renderable axis description in axis-local coordinates.
///
/// The abscissa runs along x at `y = 0`, the ordinate along y at `x = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub kind: AxisKind,
    pub range: ValueRange,
    pub line: LineSegment,
    pub marks: Vec<LineSegment>,
    pub ticks: Vec<AxisTick>,
}

/// Abscissa or ordinate of a chart.
///
/// Holds the auto/pinned visible range, the scale and the drawing extent.
/// `factor` fits the range onto `size` and is recomputed whenever either
/// changes.
#[derive(Debug)]
pub struct Axis {
    kind: AxisKind,
    range: Setting<ValueRange, SeriesList>,
    scale: Scale,
    size: f64,
    factor: f64,
    tick_generator: TickGenerator,
    tickmarks: Tickmarks,
    labels: Labels,
}

impl Axis {
    /// Creates an axis whose range follows the union of `series`.
    #[must_use]
    pub fn new(
        kind: AxisKind,
        scale: Scale,
        tick_generator: TickGenerator,
        series: &SeriesList,
    ) -> Self {
        let range = Setting::new(
            None,
            move |series: &SeriesList| kind.merged_range(series),
            series,
        );
        let mut axis = Self {
            kind,
            range,
            scale,
            size: 0.0,
            factor: 1.0,
            tick_generator,
            tickmarks: Tickmarks::default(),
            labels: Labels::default(),
        };
        axis.recompute_factor();
        axis
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
        self.recompute_factor();
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
        self.recompute_factor();
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Current visible range.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        *self.range.value()
    }

    #[must_use]
    pub fn range_setting(&self) -> &Setting<ValueRange, SeriesList> {
        &self.range
    }

    #[must_use]
    pub fn is_range_pinned(&self) -> bool {
        self.range.is_user_value()
    }

    /// Registers a callback fired when the range is pinned or reset.
    pub fn on_range_change<C>(&mut self, callback: C)
    where
        C: FnMut(&ValueRange) + 'static,
    {
        self.range.on_change(callback);
    }

    pub fn pin_range(&mut self, range: ValueRange) {
        self.range.set(range);
        self.recompute_factor();
    }

    pub fn unpin_range(&mut self, series: &SeriesList) {
        self.range.reset(series);
        self.recompute_factor();
    }

    /// Recomputes the range from `series` unless it is pinned.
    pub fn update_range(&mut self, series: &SeriesList) -> bool {
        let updated = self.range.update(series);
        self.recompute_factor();
        updated
    }

    #[must_use]
    pub fn tick_generator(&self) -> TickGenerator {
        self.tick_generator
    }

    pub fn set_tick_generator(&mut self, tick_generator: TickGenerator) {
        self.tick_generator = tick_generator;
    }

    #[must_use]
    pub fn minimal_label_space(&self) -> f64 {
        self.tick_generator.minimal_spacing()
    }

    #[must_use]
    pub fn tickmarks(&self) -> &Tickmarks {
        &self.tickmarks
    }

    pub fn set_tickmarks(&mut self, tickmarks: Tickmarks) {
        self.tickmarks = tickmarks;
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    #[must_use]
    pub fn transform(&self) -> AxisTransform {
        AxisTransform {
            scale: self.scale,
            offset: self.range().min,
            factor: self.factor,
        }
    }

    /// Maps a value onto the axis extent; `range.min` lands on `0`.
    #[must_use]
    pub fn transform_value(&self, value: f64) -> f64 {
        self.transform().apply(value)
    }

    /// Inverse of [`Axis::transform_value`]. A zero-sized axis maps every
    /// coordinate back to `range.min`.
    #[must_use]
    pub fn transform_coordinate(&self, coordinate: f64) -> f64 {
        self.transform().invert(coordinate)
    }

    /// Tick values from the current policy that land on a finite position.
    ///
    /// Values outside the scale domain (`<= 0` on a log axis) are skipped.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        let size = self.size;
        let generator = self.tick_generator;
        let transform = self.transform();
        let mut values = self
            .tickmarks
            .values_for_range(self.range(), |range| generator.generate(range, size));
        let before = values.len();
        values.retain(|value| transform.apply(*value).is_finite());
        if values.len() != before {
            trace!(
                axis = ?self.kind,
                dropped = before - values.len(),
                "skip ticks outside scale domain"
            );
        }
        values
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<AxisTick> {
        let range = self.range();
        let values = self.tick_values();
        let labels = self.labels.labels_for_ticks(range, &values);
        values
            .into_iter()
            .zip(labels)
            .map(|(value, label)| AxisTick {
                value,
                position: self.transform_value(value),
                label,
            })
            .collect()
    }

    #[must_use]
    pub fn geometry(&self) -> AxisGeometry {
        let ticks = self.ticks();
        let (line, marks) = match self.kind {
            AxisKind::Abscissa => (
                LineSegment::new(-self.size, 0.0, 2.0 * self.size, 0.0),
                ticks
                    .iter()
                    .map(|tick| {
                        LineSegment::new(
                            tick.position,
                            TICK_MARK_LENGTH,
                            tick.position,
                            -TICK_MARK_LENGTH,
                        )
                    })
                    .collect(),
            ),
            AxisKind::Ordinate => (
                LineSegment::new(0.0, -self.size, 0.0, 2.0 * self.size),
                ticks
                    .iter()
                    .map(|tick| {
                        LineSegment::new(
                            -TICK_MARK_LENGTH,
                            tick.position,
                            TICK_MARK_LENGTH,
                            tick.position,
                        )
                    })
                    .collect(),
            ),
        };

        AxisGeometry {
            kind: self.kind,
            range: self.range(),
            line,
            marks,
            ticks,
        }
    }

    fn recompute_factor(&mut self) {
        self.factor = self.fitted_factor();
    }

    fn fitted_factor(&self) -> f64 {
        let range = self.range();
        let span = if self.scale.is_linear() {
            range.size()
        } else {
            self.scale.transform_value(range.max, range.min)
        };
        let guarded = guarded_span(span);
        if guarded != span {
            debug!(
                axis = ?self.kind,
                min = range.min,
                max = range.max,
                "degenerate axis span, fitting as unit span"
            );
        }
        self.size / guarded
    }
}
