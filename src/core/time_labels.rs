use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Span (seconds) up to which time labels show seconds.
pub const SECOND_LABEL_SPAN: f64 = 600.0;
/// Span (seconds) up to which time labels show minutes.
pub const MINUTE_LABEL_SPAN: f64 = 172_800.0;

/// UTC layout of a time tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLabelPattern {
    Date,
    DateMinute,
    DateSecond,
}

impl TimeLabelPattern {
    /// Picks the coarsest pattern that still tells ticks of `span` seconds apart.
    #[must_use]
    pub fn for_span(span: f64) -> Self {
        let span = span.abs();
        if span <= SECOND_LABEL_SPAN {
            Self::DateSecond
        } else if span <= MINUTE_LABEL_SPAN {
            Self::DateMinute
        } else {
            Self::Date
        }
    }

    #[must_use]
    pub fn format_str(self) -> &'static str {
        match self {
            Self::Date => "%Y-%m-%d",
            Self::DateMinute => "%Y-%m-%d %H:%M",
            Self::DateSecond => "%Y-%m-%d %H:%M:%S",
        }
    }
}

/// Unix time of `time` in fractional seconds, the x unit of time series.
#[must_use]
pub fn unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Formats unix seconds as a UTC label; `None` outside chrono's range.
#[must_use]
pub fn format_unix_seconds(seconds: f64, pattern: TimeLabelPattern) -> Option<String> {
    if !seconds.is_finite() {
        return None;
    }
    let time = DateTime::<Utc>::from_timestamp(seconds.round() as i64, 0)?;
    Some(time.format(pattern.format_str()).to_string())
}
