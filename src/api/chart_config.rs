use serde::{Deserialize, Serialize};

use crate::core::{ChartSize, DEFAULT_MINIMAL_SPACING, Scale, TickGenerator, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Series data is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub size: ChartSize,
    #[serde(default = "default_minimal_label_space")]
    pub minimal_label_space: f64,
    #[serde(default)]
    pub x_scale: Scale,
    #[serde(default)]
    pub y_scale: Scale,
    /// Initial pinned abscissa range; auto-derived from data when absent.
    #[serde(default)]
    pub x_range: Option<ValueRange>,
    /// Initial pinned ordinate range; auto-derived from data when absent.
    #[serde(default)]
    pub y_range: Option<ValueRange>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(ChartSize::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(size: ChartSize) -> Self {
        Self {
            size,
            minimal_label_space: default_minimal_label_space(),
            x_scale: Scale::default(),
            y_scale: Scale::default(),
            x_range: None,
            y_range: None,
        }
    }

    #[must_use]
    pub fn with_minimal_label_space(mut self, minimal_label_space: f64) -> Self {
        self.minimal_label_space = minimal_label_space;
        self
    }

    #[must_use]
    pub fn with_x_scale(mut self, scale: Scale) -> Self {
        self.x_scale = scale;
        self
    }

    #[must_use]
    pub fn with_y_scale(mut self, scale: Scale) -> Self {
        self.y_scale = scale;
        self
    }

    /// Pins the abscissa range from construction on.
    #[must_use]
    pub fn with_x_range(mut self, range: ValueRange) -> Self {
        self.x_range = Some(range);
        self
    }

    /// Pins the ordinate range from construction on.
    #[must_use]
    pub fn with_y_range(mut self, range: ValueRange) -> Self {
        self.y_range = Some(range);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.size.validate()?;
        TickGenerator::new(self.minimal_label_space)?;
        for scale in [self.x_scale, self.y_scale] {
            scale
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        }
        for range in [self.x_range, self.y_range].into_iter().flatten() {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "pinned range bounds must be finite".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_minimal_label_space() -> f64 {
    DEFAULT_MINIMAL_SPACING
}
