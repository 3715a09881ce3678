//! Run trigger DTOs

use serde::{Deserialize, Serialize};

/// Response to `POST /run` when the job was accepted.
///
/// The run itself happens in the background on the service; completion is
/// observed later through the log listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAccepted {
    pub success: bool,
    pub message: String,
    pub execution_id: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}
