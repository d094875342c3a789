use crate::aggregate::{CountryCount, DayCount};
use serde::Serialize;

pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

/// Renderer-agnostic chart description: one label per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl ChartSpec {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pie chart over the first `limit` country rows.
pub fn country_chart(countries: &[CountryCount], limit: usize) -> ChartSpec {
    let rows = &countries[..limit.min(countries.len())];

    ChartSpec {
        kind: ChartKind::Pie,
        title: "Sessions by country".to_string(),
        labels: rows
            .iter()
            .map(|c| {
                c.country_short
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
            })
            .collect(),
        data: rows.iter().map(|c| c.country_count).collect(),
    }
}

/// Bar chart over every day, oldest day first.
pub fn time_chart(days: &[DayCount]) -> ChartSpec {
    let mut rows: Vec<&DayCount> = days.iter().collect();
    rows.sort_by_key(|d| d.day);

    let mut labels = Vec::with_capacity(rows.len());
    let mut data = Vec::with_capacity(rows.len());

    for d in rows {
        labels.push(d.day.format("%Y-%m-%d").to_string());
        data.push(d.day_count);
    }

    ChartSpec {
        kind: ChartKind::Bar,
        title: "Time Repartition".to_string(),
        labels,
        data,
    }
}
