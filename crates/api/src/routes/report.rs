//! Downloadable Result Report

use axum::{
    extract::Query,
    http::header,
    response::IntoResponse,
};
use risk_rules::RiskLevel;
use serde::Deserialize;

/// Query parameters for the report endpoint
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Risk label to print
    pub risk: Option<String>,
}

/// Render the report body. Anything but a known label prints as "Unknown".
pub fn render_report(risk: Option<&str>) -> String {
    let label = risk
        .and_then(|r| r.parse::<RiskLevel>().ok())
        .map_or("Unknown", RiskLevel::label);
    format!(
        "ICAO Weather Risk Analysis Result:\nPredicted Risk Level: {}",
        label
    )
}

/// Serve the report as a `result.txt` attachment
pub async fn download(Query(params): Query<ReportQuery>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"result.txt\""),
        ],
        render_report(params.risk.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_label() {
        assert_eq!(
            render_report(Some("moderate")),
            "ICAO Weather Risk Analysis Result:\nPredicted Risk Level: Moderate"
        );
    }

    #[test]
    fn test_missing_or_unknown_label() {
        assert!(render_report(None).ends_with("Predicted Risk Level: Unknown"));
        assert!(render_report(Some("<script>")).ends_with("Predicted Risk Level: Unknown"));
    }
}
