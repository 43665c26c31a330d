use serde::{Deserialize, Serialize};

use crate::core::{AxisGeometry, ChartSize, LineSegment, SeriesId};
use crate::error::{ChartError, ChartResult};

/// Projected polyline of one series, in drawing coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPolyline {
    pub id: SeriesId,
    pub points: Vec<(f64, f64)>,
}

impl SeriesPolyline {
    /// Adjacent point pairs as line segments; empty below two points.
    #[must_use]
    pub fn segments(&self) -> Vec<LineSegment> {
        self.points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1))
            .collect()
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub size: ChartSize,
    pub abscissa: AxisGeometry,
    pub ordinate: AxisGeometry,
    pub series: Vec<SeriesPolyline>,
}

impl ChartFrame {
    pub fn validate(&self) -> ChartResult<()> {
        self.size.validate()?;

        for axis in [&self.abscissa, &self.ordinate] {
            if !axis.line.is_finite() || axis.marks.iter().any(|mark| !mark.is_finite()) {
                return Err(ChartError::InvalidData(
                    "axis geometry must be finite".to_owned(),
                ));
            }
        }
        for polyline in &self.series {
            if polyline
                .points
                .iter()
                .any(|(x, y)| !x.is_finite() || !y.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "polyline of series {} must be finite",
                    polyline.id
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.abscissa.ticks.len() + self.ordinate.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|polyline| polyline.points.is_empty())
    }
}
