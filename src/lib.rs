//! linechart-rs: value-space model and axis engine for 2D line charts.
//!
//! The crate maps data points onto a drawable coordinate space, derives
//! visible ranges from plotted series and computes nice-number axis ticks.
//! Drawing itself is left to a [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartCoordinator};
pub use error::{ChartError, ChartResult};
