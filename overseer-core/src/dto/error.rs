//! Error payload DTO

use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
