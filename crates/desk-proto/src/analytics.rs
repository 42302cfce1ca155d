//! Analytics summary payload from `GET /analytics/summary/`.
//!
//! The backend pre-aggregates; each breakdown arrives as an ordered list of
//! `{dimension_key, count}` rows whose key field is named after the
//! dimension.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentCount {
    pub sentiment: String,
    pub count: u64,
}

/// Read-only dashboard snapshot, fetched once per dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: u64,
    #[serde(default)]
    pub avg_resolution_seconds: Option<f64>,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
    #[serde(default)]
    pub by_category: Vec<CategoryCount>,
    #[serde(default)]
    pub by_sentiment: Vec<SentimentCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_decodes_backend_payload() {
        let json = r#"{
            "total": 12,
            "by_status": [
                {"status": "IN_PROGRESS", "count": 2},
                {"status": "OPEN", "count": 7},
                {"status": "RESOLVED", "count": 3}
            ],
            "by_category": [
                {"category": "BILLING", "count": 6},
                {"category": "TECH", "count": 4},
                {"category": "OTHER", "count": 2}
            ],
            "by_sentiment": [
                {"sentiment": "ANGRY", "count": 5},
                {"sentiment": "NEUTRAL", "count": 7}
            ],
            "avg_resolution_seconds": 5400.5
        }"#;

        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total, 12);
        assert_eq!(summary.by_category[0].category, "BILLING");
        assert_eq!(summary.avg_resolution_seconds, Some(5400.5));
    }

    #[test]
    fn summary_tolerates_null_average_and_empty_dimensions() {
        let json = r#"{"total": 0, "by_status": [], "by_category": [], "by_sentiment": [], "avg_resolution_seconds": null}"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert!(summary.avg_resolution_seconds.is_none());
        assert!(summary.by_status.is_empty());
    }
}
