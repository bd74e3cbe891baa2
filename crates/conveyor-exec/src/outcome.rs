//! Execution outcome modeling.

use serde_json::Value;

/// Result of one job invocation.
///
/// Computed fresh per invocation, returned to the caller, then discarded —
/// this crate persists nothing. Only [`ExecutionOutcome::Performed`] means
/// the job body actually ran to completion; the other variants are normal
/// skips, never failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// The job body ran to completion.
    Performed {
        /// Result payload returned by the body.
        result: Option<Value>,
    },
    /// A before hook aborted the invocation ahead of the body.
    Aborted,
    /// An around hook returned without invoking its continuation.
    Skipped,
    /// The body failed but an around hook absorbed the failure.
    Suppressed,
}

impl ExecutionOutcome {
    /// Whether the job body actually ran to completion.
    pub fn performed(&self) -> bool {
        matches!(self, Self::Performed { .. })
    }

    /// The body's result payload, when it performed.
    pub fn result(&self) -> Option<&Value> {
        match self {
            Self::Performed { result } => result.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_performed_counts_as_performed() {
        let performed = ExecutionOutcome::Performed {
            result: Some(serde_json::json!({"rows": 10})),
        };
        assert!(performed.performed());
        assert!(!ExecutionOutcome::Aborted.performed());
        assert!(!ExecutionOutcome::Skipped.performed());
        assert!(!ExecutionOutcome::Suppressed.performed());
    }

    #[test]
    fn test_result_payload_access() {
        let performed = ExecutionOutcome::Performed {
            result: Some(serde_json::json!({"rows": 10})),
        };
        assert_eq!(performed.result(), Some(&serde_json::json!({"rows": 10})));
        assert_eq!(ExecutionOutcome::Skipped.result(), None);
    }
}
