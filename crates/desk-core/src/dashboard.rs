//! Reshapes the server's pre-aggregated analytics into chart-ready series.
//!
//! Purely presentational: server ordering is preserved, nothing is
//! re-aggregated or re-sorted, and empty dimensions stay empty.

use desk_proto::AnalyticsSummary;

/// One bar/slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

pub fn category_series(summary: &AnalyticsSummary) -> Vec<SeriesPoint> {
    summary
        .by_category
        .iter()
        .map(|row| SeriesPoint {
            label: row.category.clone(),
            value: row.count,
        })
        .collect()
}

pub fn status_series(summary: &AnalyticsSummary) -> Vec<SeriesPoint> {
    summary
        .by_status
        .iter()
        .map(|row| SeriesPoint {
            label: row.status.clone(),
            value: row.count,
        })
        .collect()
}

pub fn sentiment_series(summary: &AnalyticsSummary) -> Vec<SeriesPoint> {
    summary
        .by_sentiment
        .iter()
        .map(|row| SeriesPoint {
            label: row.sentiment.clone(),
            value: row.count,
        })
        .collect()
}

/// Average resolution time for display. Absent or non-positive values
/// render as an em-dash placeholder to distinguish "no data" from
/// "instant resolution".
pub fn format_avg_resolution(avg_seconds: Option<f64>) -> String {
    match avg_seconds {
        Some(secs) if secs > 0.0 => format!("{}", secs.round() as u64),
        _ => "—".to_string(),
    }
}
