use thiserror::Error;

use crate::core::SeriesId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: width={width}, height={height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown series: {0}")]
    UnknownSeries(SeriesId),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
