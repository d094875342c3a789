use crate::aggregate::{
    CommandCount, CountryCount, DayCount, IpCount, SessionSummary, country_counts,
    day_repartition, ip_counts, latest_sessions, top_commands,
};
use crate::conf::DashboardConfig;
use crate::dataset::EventTable;
use crate::present::chart::{ChartSpec, country_chart, time_chart};
use serde::Serialize;

/// Row limits for the truncated dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub top_ips: usize,
    pub top_countries: usize,
    pub latest_sessions: usize,
    pub top_commands: usize,
    pub chart_countries: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl From<&DashboardConfig> for DashboardLimits {
    fn from(cfg: &DashboardConfig) -> Self {
        Self {
            top_ips: cfg.top_ips,
            top_countries: cfg.top_countries,
            latest_sessions: cfg.latest_sessions,
            top_commands: cfg.top_commands,
            chart_countries: cfg.chart_countries,
        }
    }
}

/// Everything the home page shows, computed from one table snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_events: usize,
    pub total_connects: usize,
    pub top_ips: Vec<IpCount>,
    pub top_countries: Vec<CountryCount>,
    pub latest_sessions: Vec<SessionSummary>,
    pub top_commands: Vec<CommandCount>,
    pub day_repartition: Vec<DayCount>,
    pub country_chart: ChartSpec,
    pub time_chart: ChartSpec,
}

impl Dashboard {
    pub fn build(table: &EventTable, limits: &DashboardLimits) -> Self {
        let countries = country_counts(table);
        let days = day_repartition(table);

        let country_chart = country_chart(&countries, limits.chart_countries);
        let time_chart = time_chart(&days);

        Self {
            total_events: table.len(),
            total_connects: table.connect_count(),
            top_ips: truncated(ip_counts(table), limits.top_ips),
            top_countries: truncated(countries, limits.top_countries),
            latest_sessions: truncated(latest_sessions(table), limits.latest_sessions),
            top_commands: truncated(top_commands(table), limits.top_commands),
            day_repartition: days,
            country_chart,
            time_chart,
        }
    }
}

fn truncated<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}
