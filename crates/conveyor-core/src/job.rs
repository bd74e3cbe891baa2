//! Job descriptor model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single unit of work handed to the execution engine.
///
/// A descriptor is constructed once per invocation and treated as read-only
/// afterwards. It is owned by the invocation that created it and is never
/// shared across concurrent invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Unique invocation identifier.
    pub id: Uuid,
    /// Queue the job was dequeued from.
    pub queue: String,
    /// Job type identifier (e.g., `"report_generation"`, `"session_cleanup"`).
    pub job_type: String,
    /// Ordered job arguments.
    pub args: Vec<serde_json::Value>,
    /// When the descriptor was created.
    pub created_at: DateTime<Utc>,
}

impl JobDescriptor {
    /// Create a new descriptor for one invocation of `job_type`.
    pub fn new(
        queue: impl Into<String>,
        job_type: impl Into<String>,
        args: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            queue: queue.into(),
            job_type: job_type.into(),
            args,
            created_at: Utc::now(),
        }
    }

    /// Get a positional argument, if present.
    pub fn arg(&self, index: usize) -> Option<&serde_json::Value> {
        self.args.get(index)
    }
}
