//! Schedule DTOs

use serde::{Deserialize, Serialize};

use crate::domain::schedule::ScheduleStatus;

/// Envelope returned by `GET /schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEnvelope {
    pub cron_status: ScheduleStatus,
}
