//! Report resource payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a generated report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReportStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// A report generation job as returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub kind: String,
    pub status: ReportStatus,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub download_url: Option<String>,
}

/// Payload requesting generation of a report over a date range.
///
/// Dates use the remote contract's `YYYY-MM-DD` form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub kind: String,
    pub period_start: String,
    pub period_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Report {
    /// Whether the job has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            ReportStatus::Completed | ReportStatus::Failed | ReportStatus::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_camel_case() {
        let json = serde_json::to_string(&ReportStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
    }

    #[test]
    fn completed_report_is_finished() {
        let report: Report = serde_json::from_str(
            r#"{
                "id": "rep-1",
                "kind": "usage",
                "status": "completed",
                "requestedAt": "2025-11-01T09:00:00Z",
                "completedAt": "2025-11-01T09:02:00Z",
                "downloadUrl": "https://files.example/rep-1.csv"
            }"#,
        )
        .unwrap();

        assert!(report.is_finished());
        assert_eq!(report.status, ReportStatus::Completed);
    }

    #[test]
    fn pending_report_is_not_finished() {
        let report: Report = serde_json::from_str(
            r#"{
                "id": "rep-2",
                "kind": "audit",
                "status": "pending",
                "requestedAt": "2025-11-01T09:00:00Z",
                "completedAt": null,
                "downloadUrl": null
            }"#,
        )
        .unwrap();

        assert!(!report.is_finished());
    }
}
