//! Execution orchestrator — runs one job invocation through its hooks.
//!
//! Phases run strictly in order: before hooks, the around chain wrapping the
//! body, then after hooks. A deliberate abort or a non-invoked continuation
//! ends the invocation as a normal skip; any other raised condition
//! propagates to the caller unchanged.

use std::sync::Arc;
use std::time::Instant;

use tracing;

use conveyor_core::config::ExecutionConfig;
use conveyor_core::{ConveyorError, JobDescriptor};

use crate::error::{ExecutionError, Interrupt};
use crate::hook::{BodyCell, BodyState, Continuation};
use crate::outcome::ExecutionOutcome;
use crate::registry::{JobDefinition, JobResolver};

/// Runs the full before → around(body) → after sequence for one invocation.
///
/// The orchestrator owns no state shared across invocations; concurrent
/// invocations of different jobs are fully independent.
#[derive(Debug)]
pub struct ExecutionOrchestrator {
    /// Job type resolution, queried once per invocation.
    resolver: Arc<dyn JobResolver>,
    /// Execution policy.
    config: ExecutionConfig,
}

impl ExecutionOrchestrator {
    /// Create an orchestrator over a resolver with the default policy.
    pub fn new(resolver: Arc<dyn JobResolver>) -> Self {
        Self {
            resolver,
            config: ExecutionConfig::default(),
        }
    }

    /// Set the execution policy.
    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute one job invocation.
    ///
    /// `Ok` with a non-performed outcome is a normal skip, not a failure.
    /// `Err` carries the first unrecovered condition raised by a hook or the
    /// body, unchanged.
    pub async fn execute(
        &self,
        job: &JobDescriptor,
    ) -> Result<ExecutionOutcome, ExecutionError> {
        let definition = self.resolver.resolve(&job.job_type).ok_or_else(|| {
            ExecutionError::Permanent(format!(
                "no job registered for type '{}'",
                job.job_type
            ))
        })?;

        tracing::info!(
            "Executing job: id={}, type='{}', queue='{}'",
            job.id,
            job.job_type,
            job.queue
        );
        let started = Instant::now();

        let result = self.run_phases(job, &definition).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(outcome) => {
                tracing::info!(
                    "Job {} completed: performed={}, elapsed_ms={}",
                    job.id,
                    outcome.performed(),
                    elapsed_ms
                );
            }
            Err(e) => {
                tracing::error!("Job {} failed after {}ms: {}", job.id, elapsed_ms, e);
            }
        }

        result
    }

    async fn run_phases(
        &self,
        job: &JobDescriptor,
        definition: &Arc<JobDefinition>,
    ) -> Result<ExecutionOutcome, ExecutionError> {
        let hooks = definition.hooks();

        // Before phase: abort ends the invocation quietly, any other
        // condition propagates and nothing further runs.
        for hook in hooks.before() {
            tracing::debug!("Running before hook '{}' for job {}", hook.name(), job.id);
            match hook.before_perform(job).await {
                Ok(()) => {}
                Err(Interrupt::Abort(_)) => {
                    tracing::debug!(
                        "Job {} aborted by before hook '{}'",
                        job.id,
                        hook.name()
                    );
                    return Ok(ExecutionOutcome::Aborted);
                }
                Err(Interrupt::Fail(err)) => return Err(err),
            }
        }

        // Around phase: the first-registered hook is outermost. The chain
        // bottoms out in the body; the cell records the body's fate even
        // when a hook absorbs its error.
        let body = BodyCell::new();
        let continuation = Continuation::new(
            Arc::new(job.clone()),
            Arc::clone(definition),
            body.clone(),
        );
        continuation.invoke().await?;

        match body.take() {
            BodyState::Completed(result) => {
                // After phase: first error propagates, remaining hooks are
                // skipped. The body already ran, so this is an
                // after-the-fact failure signal.
                for hook in hooks.after() {
                    tracing::debug!(
                        "Running after hook '{}' for job {}",
                        hook.name(),
                        job.id
                    );
                    hook.after_perform(job).await?;
                }
                Ok(ExecutionOutcome::Performed { result })
            }
            BodyState::NotRun => {
                tracing::debug!(
                    "Job {} skipped: around hook did not invoke its continuation",
                    job.id
                );
                Ok(ExecutionOutcome::Skipped)
            }
            BodyState::Failed(message) => {
                if self.config.propagate_suppressed_failures {
                    Err(ExecutionError::Internal(ConveyorError::internal(format!(
                        "around hook suppressed job failure: {message}"
                    ))))
                } else {
                    tracing::warn!(
                        "Job {} failure suppressed by around hook: {}",
                        job.id,
                        message
                    );
                    Ok(ExecutionOutcome::Suppressed)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::hook::PerformJob;
    use crate::registry::HookRegistry;

    #[derive(Debug)]
    struct CountingJob;

    #[async_trait]
    impl PerformJob for CountingJob {
        fn job_type(&self) -> &str {
            "counting"
        }

        async fn perform(&self, job: &JobDescriptor) -> Result<Option<Value>, ExecutionError> {
            Ok(Some(serde_json::json!({ "args_seen": job.args.len() })))
        }
    }

    fn orchestrator() -> ExecutionOrchestrator {
        let mut registry = HookRegistry::new();
        registry.register(JobDefinition::new(Arc::new(CountingJob)));
        ExecutionOrchestrator::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn test_hookless_job_performs_unconditionally() {
        let job = JobDescriptor::new("default", "counting", vec![serde_json::json!("a")]);
        let outcome = orchestrator().execute(&job).await.unwrap();

        assert!(outcome.performed());
        assert_eq!(outcome.result(), Some(&serde_json::json!({ "args_seen": 1 })));
    }

    #[tokio::test]
    async fn test_unknown_job_type_is_a_permanent_failure() {
        let job = JobDescriptor::new("default", "unregistered", vec![]);
        let err = orchestrator().execute(&job).await.unwrap_err();

        match err {
            ExecutionError::Permanent(message) => {
                assert!(message.contains("unregistered"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
