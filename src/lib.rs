//! # Conveyor
//!
//! Hook-driven job execution core for the Conveyor background job system.
//!
//! This facade crate re-exports the public surface of the workspace:
//! - [`conveyor_core`] — configuration, the job descriptor, and the unified
//!   error system
//! - [`conveyor_exec`] — hook contracts, the job registry, and the execution
//!   orchestrator
//!
//! Queue transport, worker lifecycle, and retry policy live outside this
//! workspace; embedders dequeue a [`JobDescriptor`], hand it to
//! [`ExecutionOrchestrator::execute`], and schedule retries from the
//! returned error's permanent/transient discriminant.

pub use conveyor_core::config::{AppConfig, ExecutionConfig, LoggingConfig};
pub use conveyor_core::{ConveyorError, CoreResult, JobDescriptor};
pub use conveyor_exec::{
    AbortSignal, AfterHook, AroundHook, BeforeHook, Continuation, ExecutionError,
    ExecutionOrchestrator, ExecutionOutcome, HookRegistry, HookSet, Interrupt, JobDefinition,
    JobResolver, PerformJob,
};
