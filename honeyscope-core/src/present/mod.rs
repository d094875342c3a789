//! Sink side of the pipeline: dashboard assembly, chart descriptions and
//! terminal rendering. Views in, renderable artifacts out.

mod chart;
mod dashboard;
mod text;


pub use chart::{ChartKind, ChartSpec, UNKNOWN_LABEL, country_chart, time_chart};
pub use dashboard::{Dashboard, DashboardLimits};
pub use text::{render_chart, render_dashboard, render_session};
