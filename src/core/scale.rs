use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value-to-coordinate mapping used by an axis.
///
/// Every variant is offset-relative: `offset` is the value that lands on
/// coordinate `0`. `transform_coordinate` is the inverse of `transform_value`
/// for the same offset, within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scale {
    /// `coordinate = value - offset`.
    #[default]
    Linear,
    /// `coordinate = (value - offset) * factor`.
    Resized { factor: f64 },
    /// `coordinate = log_base(value) - log_base(offset)`; only values > 0 map
    /// to finite coordinates. A non-positive offset contributes nothing.
    Log { base: f64 },
}

impl Scale {
    /// Creates a scaled-linear variant with a finite, non-zero factor.
    pub fn resized(factor: f64) -> ChartResult<Self> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(ChartError::InvalidData(
                "scale factor must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self::Resized { factor })
    }

    /// Creates a logarithmic variant; `base` must be finite, > 0 and != 1.
    pub fn log(base: f64) -> ChartResult<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(ChartError::InvalidData(
                "log scale base must be finite, > 0 and != 1".to_owned(),
            ));
        }
        Ok(Self::Log { base })
    }

    #[must_use]
    pub fn transform_value(self, value: f64, offset: f64) -> f64 {
        match self {
            Self::Linear => value - offset,
            Self::Resized { factor } => (value - offset) * factor,
            Self::Log { base } => {
                if value <= 0.0 {
                    return f64::NAN;
                }
                value.log(base) - log_offset(offset, base)
            }
        }
    }

    #[must_use]
    pub fn transform_coordinate(self, coordinate: f64, offset: f64) -> f64 {
        match self {
            Self::Linear => offset + coordinate,
            Self::Resized { factor } => offset + coordinate / factor,
            Self::Log { base } => base.powf(coordinate + log_offset(offset, base)),
        }
    }

    #[must_use]
    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear | Self::Resized { .. })
    }

    pub fn validate(self) -> ChartResult<Self> {
        match self {
            Self::Linear => Ok(self),
            Self::Resized { factor } => Self::resized(factor),
            Self::Log { base } => Self::log(base),
        }
    }
}

fn log_offset(offset: f64, base: f64) -> f64 {
    if offset > 0.0 && offset.is_finite() {
        offset.log(base)
    } else {
        0.0
    }
}
