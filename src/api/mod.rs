mod chart_config;
mod chart_coordinator;
mod series_projection;

pub use chart_config::ChartConfig;
pub use chart_coordinator::ChartCoordinator;
pub use series_projection::project_points;
