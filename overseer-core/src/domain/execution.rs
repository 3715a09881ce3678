//! Execution domain types

use serde::{Deserialize, Serialize};

/// One recorded invocation of the backend automation job.
///
/// Records come back from `GET /logs`. A record belongs to a finished run
/// once `completed_at` is set; until then the run is still in flight and
/// `success` carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Opaque token issued by the backend when the run was accepted
    pub execution_id: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub results: Option<ExecutionResults>,
    pub error_message: Option<String>,
}

impl ExecutionRecord {
    /// Whether this record marks a finished run
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Summary payload attached to a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResults {
    #[serde(default)]
    pub weeks_processed: u32,
    /// Processed participants; only the count is consumed client-side
    #[serde(default)]
    pub participants: Vec<serde_json::Value>,
}
