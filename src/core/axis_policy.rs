use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::ValueRange;
use crate::core::time_labels::{TimeLabelPattern, format_unix_seconds};

/// Tick value to label text, in display order.
pub type LabelMap = IndexMap<OrderedFloat<f64>, String>;

type TickFn = Box<dyn Fn(ValueRange) -> Vec<f64>>;
type LabelFn = Box<dyn Fn(ValueRange) -> LabelMap>;

/// Where an axis gets its tick values from.
#[derive(Default)]
pub enum Tickmarks {
    None,
    /// Nice-number ticks sized to the axis extent.
    #[default]
    Nice,
    Generate(TickFn),
    UserDefined(Vec<f64>),
}

impl Tickmarks {
    pub fn generate<F>(generator: F) -> Self
    where
        F: Fn(ValueRange) -> Vec<f64> + 'static,
    {
        Self::Generate(Box::new(generator))
    }

    /// Resolves tick values for `range`; `nice` backs the [`Tickmarks::Nice`] policy.
    pub fn values_for_range<N>(&self, range: ValueRange, nice: N) -> Vec<f64>
    where
        N: FnOnce(ValueRange) -> Vec<f64>,
    {
        match self {
            Self::None => Vec::new(),
            Self::Nice => nice(range),
            Self::Generate(generator) => generator(range),
            Self::UserDefined(values) => values.clone(),
        }
    }
}

impl fmt::Debug for Tickmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Nice => f.write_str("Nice"),
            Self::Generate(_) => f.write_str("Generate(..)"),
            Self::UserDefined(values) => f.debug_tuple("UserDefined").field(values).finish(),
        }
    }
}

/// Where an axis gets its tick label text from.
#[derive(Default)]
pub enum Labels {
    #[default]
    None,
    /// Decimal text with a precision derived from the tick step.
    Numeric,
    /// UTC date/time text for ticks in unix seconds, coarsened with the
    /// visible span.
    UtcTime,
    Generate(LabelFn),
    UserDefined(LabelMap),
}

impl Labels {
    pub fn generate<F>(generator: F) -> Self
    where
        F: Fn(ValueRange) -> LabelMap + 'static,
    {
        Self::Generate(Box::new(generator))
    }

    /// Label per tick, aligned with `ticks`.
    #[must_use]
    pub fn labels_for_ticks(&self, range: ValueRange, ticks: &[f64]) -> Vec<Option<String>> {
        let step = tick_step_hint_from_values(ticks);
        match self {
            Self::None => vec![None; ticks.len()],
            Self::Numeric => {
                let precision = precision_from_step(step);
                ticks
                    .iter()
                    .map(|value| Some(format_numeric_label(*value, precision)))
                    .collect()
            }
            Self::UtcTime => {
                let pattern = TimeLabelPattern::for_span(range.size());
                ticks
                    .iter()
                    .map(|value| format_unix_seconds(*value, pattern))
                    .collect()
            }
            Self::Generate(generator) => {
                let map = generator(range);
                lookup_labels(&map, ticks, step)
            }
            Self::UserDefined(map) => lookup_labels(map, ticks, step),
        }
    }
}

impl fmt::Debug for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Numeric => f.write_str("Numeric"),
            Self::UtcTime => f.write_str("UtcTime"),
            Self::Generate(_) => f.write_str("Generate(..)"),
            Self::UserDefined(map) => f.debug_tuple("UserDefined").field(map).finish(),
        }
    }
}

fn lookup_labels(map: &LabelMap, ticks: &[f64], step: f64) -> Vec<Option<String>> {
    ticks
        .iter()
        .map(|value| {
            if let Some(text) = map.get(&OrderedFloat(*value)) {
                return Some(text.clone());
            }
            // Generated ticks accumulate rounding error (0.1 * 3 != 0.3).
            let tolerance = (step.abs() * 1e-9).max(value.abs() * f64::EPSILON * 4.0);
            map.iter()
                .find(|(key, _)| (key.0 - value).abs() <= tolerance)
                .map(|(_, text)| text.clone())
        })
        .collect()
}

pub(crate) fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}

pub(crate) fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

pub(crate) fn format_numeric_label(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let text = format!("{value:.precision$}");
    // `-0.0` and values rounding to zero should not carry a sign.
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        return text[1..].to_owned();
    }
    text
}
