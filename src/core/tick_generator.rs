use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ValueRange;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MINIMAL_SPACING: f64 = 32.0;

/// Upper bound on intervals per axis, independent of the available space.
pub const MAX_INTERVAL_COUNT: usize = 4_096;

const STEP_FACTORS: [f64; 2] = [5.0, 2.0];
// Relative slack, in steps, when snapping the first tick onto a multiple.
const SNAP_TOLERANCE: f64 = 1e-9;
// Enough ladder rungs to walk from 1 to either end of the f64 exponent range.
const MAX_LADDER_RUNGS: usize = 1_400;

/// Nice-number tick generator.
///
/// Steps are taken from the ladder reached by alternately multiplying or
/// dividing `1` by `5` and `2` (`.., 0.1, 0.2, 1, 5, 10, 50, 100, ..`). The
/// chosen step is the smallest rung that is `>= range.size / max_count`, so
/// neighbouring ticks are never closer than `minimal_spacing` once mapped
/// onto `space`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGenerator {
    minimal_spacing: f64,
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self {
            minimal_spacing: DEFAULT_MINIMAL_SPACING,
        }
    }
}

impl TickGenerator {
    pub fn new(minimal_spacing: f64) -> ChartResult<Self> {
        if !minimal_spacing.is_finite() || minimal_spacing <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "minimal tick spacing must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { minimal_spacing })
    }

    #[must_use]
    pub fn minimal_spacing(self) -> f64 {
        self.minimal_spacing
    }

    /// Maximum number of intervals that fit into `space`; at least `1`.
    #[must_use]
    pub fn max_interval_count(self, space: f64) -> usize {
        if !space.is_finite() || space <= 0.0 {
            return 1;
        }
        let raw = (space / self.minimal_spacing).floor();
        if raw >= MAX_INTERVAL_COUNT as f64 {
            MAX_INTERVAL_COUNT
        } else {
            (raw as usize).max(1)
        }
    }

    /// Step between ticks for `range` on `space`, or `None` when the range is
    /// empty, flat or not finite.
    #[must_use]
    pub fn step_for(self, range: ValueRange, space: f64) -> Option<f64> {
        if !range.min.is_finite() || !range.max.is_finite() || range.size() <= 0.0 {
            return None;
        }
        let distance = range.size() / self.max_interval_count(space) as f64;
        if !distance.is_finite() || distance <= 0.0 {
            return None;
        }
        Some(nice_step(distance))
    }

    /// Ascending tick values covering `range`.
    ///
    /// The first tick is the largest multiple of the step `<= range.min`
    /// (a multiple within rounding error of `range.min` counts as equal); the
    /// last one is the first multiple `>= range.max`. Flat or inverted ranges
    /// yield a single tick at `range.min`, non-finite ranges yield none.
    #[must_use]
    pub fn generate(self, range: ValueRange, space: f64) -> Vec<f64> {
        let Some(step) = self.step_for(range, space) else {
            return if range.min.is_finite() {
                vec![range.min]
            } else {
                Vec::new()
            };
        };

        let first = first_multiple_index(range.min, step);
        let limit = MAX_INTERVAL_COUNT + 3;
        let mut ticks = Vec::new();
        let mut index = 0.0;
        loop {
            let value = step * (first + index);
            ticks.push(value);
            if value >= range.max {
                break;
            }
            if ticks.len() >= limit {
                warn!(
                    min = range.min,
                    max = range.max,
                    step,
                    "tick generation stopped at interval limit"
                );
                break;
            }
            index += 1.0;
        }
        ticks
    }
}

/// Index of the largest step multiple `<= min`.
///
/// A quotient within `SNAP_TOLERANCE` of an integer is taken as that integer,
/// so `0.3 / 0.1 = 2.9999999999999996` starts at `0.3`, not `0.2`.
fn first_multiple_index(min: f64, step: f64) -> f64 {
    let quotient = min / step;
    let nearest = quotient.round();
    if (quotient - nearest).abs() <= SNAP_TOLERANCE {
        nearest
    } else {
        quotient.floor()
    }
}

/// Smallest ladder rung `>= distance`, walked from `1`.
pub(crate) fn nice_step(distance: f64) -> f64 {
    let mut step = 1.0_f64;
    let mut rung = 0;

    if step < distance {
        while step < distance && rung < MAX_LADDER_RUNGS {
            step *= STEP_FACTORS[rung % STEP_FACTORS.len()];
            rung += 1;
        }
    } else {
        while rung < MAX_LADDER_RUNGS {
            let next = step / STEP_FACTORS[rung % STEP_FACTORS.len()];
            if next < distance {
                break;
            }
            step = next;
            rung += 1;
        }
    }

    step
}
