//! Hook and job body contracts, and the continuation an around hook drives.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tracing;

use conveyor_core::JobDescriptor;

use crate::error::{ExecutionError, Interrupt};
use crate::registry::JobDefinition;

/// Trait for job body implementations.
#[async_trait]
pub trait PerformJob: Send + Sync + std::fmt::Debug {
    /// The job type this body performs.
    fn job_type(&self) -> &str;

    /// Run the job body. Runs at most once per invocation.
    async fn perform(&self, job: &JobDescriptor) -> Result<Option<Value>, ExecutionError>;
}

/// A hook that runs ahead of the job body.
#[async_trait]
pub trait BeforeHook: Send + Sync + std::fmt::Debug {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Run ahead of the body.
    ///
    /// Returning `Interrupt::Abort` skips the rest of the invocation as a
    /// normal outcome; `Interrupt::Fail` propagates to the caller unchanged.
    async fn before_perform(&self, job: &JobDescriptor) -> Result<(), Interrupt>;
}

/// A hook that wraps the job body (and any around hooks nested inside it).
#[async_trait]
pub trait AroundHook: Send + Sync + std::fmt::Debug {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Wrap the layers nested inside this hook.
    ///
    /// `next` runs the next around hook, or the body if none remain. The
    /// hook may do work before invoking it, after it, or both. Dropping
    /// `next` without invoking it skips the body and ends the invocation
    /// with a skipped outcome; an error returned from `next.invoke()` should
    /// continue propagating after any cleanup unless the hook deliberately
    /// absorbs it.
    async fn around_perform(
        &self,
        job: &JobDescriptor,
        next: Continuation,
    ) -> Result<(), ExecutionError>;
}

/// A hook that runs once the job body has completed.
#[async_trait]
pub trait AfterHook: Send + Sync + std::fmt::Debug {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Run after the body. Only invoked when the body actually ran and did
    /// not raise.
    async fn after_perform(&self, job: &JobDescriptor) -> Result<(), ExecutionError>;
}

/// What actually happened to the job body during the around phase.
#[derive(Debug)]
pub(crate) enum BodyState {
    /// The continuation chain never reached the body.
    NotRun,
    /// The body ran to completion, with its result payload.
    Completed(Option<Value>),
    /// The body raised; the rendered condition is retained so the
    /// orchestrator can still report it if a hook absorbs the original.
    Failed(String),
}

/// Shared cell recording the body's fate across the continuation chain.
#[derive(Debug, Clone)]
pub(crate) struct BodyCell(Arc<Mutex<BodyState>>);

impl BodyCell {
    pub(crate) fn new() -> Self {
        Self(Arc::new(Mutex::new(BodyState::NotRun)))
    }

    fn set(&self, state: BodyState) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    pub(crate) fn take(&self) -> BodyState {
        std::mem::replace(
            &mut *self.0.lock().unwrap_or_else(|e| e.into_inner()),
            BodyState::NotRun,
        )
    }
}

/// The callable an around hook invokes to run the next inner layer.
///
/// Each nesting level gets its own `Continuation`; the first-registered
/// around hook receives the outermost one. [`Continuation::invoke`] consumes
/// the value, so the at-most-once contract is a move-semantics guarantee
/// rather than a runtime check, and dropping the value without invoking it
/// is the legal "skip the body" path.
#[derive(Debug)]
pub struct Continuation {
    job: Arc<JobDescriptor>,
    definition: Arc<JobDefinition>,
    depth: usize,
    body: BodyCell,
}

impl Continuation {
    pub(crate) fn new(
        job: Arc<JobDescriptor>,
        definition: Arc<JobDefinition>,
        body: BodyCell,
    ) -> Self {
        Self {
            job,
            definition,
            depth: 0,
            body,
        }
    }

    /// Run everything nested inside the current layer: the next around hook
    /// if one remains, otherwise the job body itself.
    pub async fn invoke(self) -> Result<(), ExecutionError> {
        let hook = self.definition.hooks().around().get(self.depth).cloned();
        match hook {
            Some(hook) => {
                let job = Arc::clone(&self.job);
                tracing::debug!(
                    "Entering around hook '{}' for job {}",
                    hook.name(),
                    job.id
                );
                let next = Self {
                    depth: self.depth + 1,
                    ..self
                };
                hook.around_perform(&job, next).await
            }
            None => {
                tracing::debug!(
                    "Running job body: id={}, type='{}'",
                    self.job.id,
                    self.job.job_type
                );
                match self.definition.perform().perform(&self.job).await {
                    Ok(result) => {
                        self.body.set(BodyState::Completed(result));
                        Ok(())
                    }
                    Err(err) => {
                        self.body.set(BodyState::Failed(err.to_string()));
                        Err(err)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_cell_starts_not_run() {
        let cell = BodyCell::new();
        assert!(matches!(cell.take(), BodyState::NotRun));
    }

    #[test]
    fn test_body_cell_records_completion() {
        let cell = BodyCell::new();
        cell.set(BodyState::Completed(Some(serde_json::json!(1))));
        match cell.take() {
            BodyState::Completed(Some(value)) => assert_eq!(value, serde_json::json!(1)),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_body_cell_retains_failure_message() {
        let cell = BodyCell::new();
        cell.set(BodyState::Failed("transient job failure: boom".to_string()));
        match cell.take() {
            BodyState::Failed(message) => {
                assert_eq!(message, "transient job failure: boom");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }
}
