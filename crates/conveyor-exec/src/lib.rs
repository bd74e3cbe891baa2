//! # conveyor-exec
//!
//! The hook execution engine for Conveyor. This crate provides:
//! - Hook and job body contracts, with an explicit continuation for around hooks
//! - Per-job-type hook sets and the registry that resolves them
//! - The orchestrator that runs one invocation through before → around(body) → after
//! - The outcome and error taxonomy reported back to the caller

pub mod error;
pub mod hook;
pub mod orchestrator;
pub mod outcome;
pub mod registry;
pub mod set;

pub use error::{AbortSignal, ExecutionError, Interrupt};
pub use hook::{AfterHook, AroundHook, BeforeHook, Continuation, PerformJob};
pub use orchestrator::ExecutionOrchestrator;
pub use outcome::ExecutionOutcome;
pub use registry::{HookRegistry, JobDefinition, JobResolver};
pub use set::HookSet;
