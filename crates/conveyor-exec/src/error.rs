//! Execution error taxonomy and the deliberate-abort signal.

use conveyor_core::ConveyorError;

/// Raised by a before hook to deliberately skip the job body.
///
/// An abort is not a failure: the orchestrator reports the invocation as
/// aborted and the caller observes no error. There is intentionally no
/// conversion from `AbortSignal` into [`ExecutionError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbortSignal;

/// Error from job execution.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Permanent failure — do not retry
    #[error("permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure — may retry
    #[error("transient job failure: {0}")]
    Transient(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(#[from] ConveyorError),
}

/// Control flow raised by a before hook.
///
/// The two variants stay distinct all the way to the orchestrator: `Abort`
/// stops execution and is still a successful outcome, `Fail` stops execution
/// and propagates to the caller unchanged.
#[derive(Debug)]
pub enum Interrupt {
    /// Deliberate skip of the job body.
    Abort(AbortSignal),
    /// Genuine failure.
    Fail(ExecutionError),
}

impl Interrupt {
    /// Shorthand for the deliberate-abort variant.
    pub fn abort() -> Self {
        Self::Abort(AbortSignal)
    }
}

impl From<AbortSignal> for Interrupt {
    fn from(signal: AbortSignal) -> Self {
        Self::Abort(signal)
    }
}

impl From<ExecutionError> for Interrupt {
    fn from(err: ExecutionError) -> Self {
        Self::Fail(err)
    }
}

impl From<ConveyorError> for Interrupt {
    fn from(err: ConveyorError) -> Self {
        Self::Fail(ExecutionError::Internal(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_shorthand() {
        assert!(matches!(Interrupt::abort(), Interrupt::Abort(AbortSignal)));
    }

    #[test]
    fn test_execution_error_converts_to_fail() {
        let interrupt = Interrupt::from(ExecutionError::Transient("db unavailable".into()));
        assert!(matches!(
            interrupt,
            Interrupt::Fail(ExecutionError::Transient(_))
        ));
    }

    #[test]
    fn test_core_error_converts_to_internal_fail() {
        let interrupt = Interrupt::from(ConveyorError::validation("missing argument"));
        assert!(matches!(
            interrupt,
            Interrupt::Fail(ExecutionError::Internal(_))
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExecutionError::Permanent("bad payload".into()).to_string(),
            "permanent job failure: bad payload"
        );
        assert_eq!(
            ExecutionError::Transient("lock contention".into()).to_string(),
            "transient job failure: lock contention"
        );
    }
}
