//! Schedule domain types

use serde::{Deserialize, Serialize};

/// State of the daily trigger configured on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStatus {
    pub active: bool,
    /// Human-readable schedule description (e.g., "매일 06:00")
    pub schedule: Option<String>,
    pub next_run: Option<chrono::DateTime<chrono::Utc>>,
}
