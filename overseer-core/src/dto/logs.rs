//! Log listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::execution::ExecutionRecord;

/// Response to `GET /logs?limit=N`, newest records first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsPage {
    pub total_count: usize,
    pub logs: Vec<ExecutionRecord>,
}

impl LogsPage {
    /// Finds the record for a given execution id, if present in this page
    pub fn find(&self, execution_id: &str) -> Option<&ExecutionRecord> {
        self.logs.iter().find(|r| r.execution_id == execution_id)
    }
}
