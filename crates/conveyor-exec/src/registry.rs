//! Job registry — resolves job types to their body and hook set.

use std::collections::HashMap;
use std::sync::Arc;

use tracing;

use crate::hook::{AfterHook, AroundHook, BeforeHook, PerformJob};
use crate::set::HookSet;

/// Resolves a job type to its definition.
///
/// Resolution must be deterministic and side-effect-free. The orchestrator
/// queries it exactly once per invocation and never re-queries mid-execution.
pub trait JobResolver: Send + Sync + std::fmt::Debug {
    /// Look up the definition for `job_type`.
    fn resolve(&self, job_type: &str) -> Option<Arc<JobDefinition>>;
}

/// A job type's perform body together with its lifecycle hooks.
#[derive(Debug)]
pub struct JobDefinition {
    /// The mandatory perform body.
    perform: Arc<dyn PerformJob>,
    /// Optional lifecycle hooks, empty sequences when absent.
    hooks: HookSet,
}

impl JobDefinition {
    /// Define a job type around its perform body.
    pub fn new(perform: Arc<dyn PerformJob>) -> Self {
        Self {
            perform,
            hooks: HookSet::new(),
        }
    }

    /// Append a before hook. Registration order is execution order.
    pub fn before(mut self, hook: Arc<dyn BeforeHook>) -> Self {
        self.hooks.push_before(hook);
        self
    }

    /// Append an around hook. The first appended hook is outermost.
    pub fn around(mut self, hook: Arc<dyn AroundHook>) -> Self {
        self.hooks.push_around(hook);
        self
    }

    /// Append an after hook. Registration order is execution order.
    pub fn after(mut self, hook: Arc<dyn AfterHook>) -> Self {
        self.hooks.push_after(hook);
        self
    }

    /// The job type this definition executes.
    pub fn job_type(&self) -> &str {
        self.perform.job_type()
    }

    /// The perform body.
    pub fn perform(&self) -> &Arc<dyn PerformJob> {
        &self.perform
    }

    /// The hook set.
    pub fn hooks(&self) -> &HookSet {
        &self.hooks
    }
}

/// In-memory job registry keyed by job type.
#[derive(Debug, Default)]
pub struct HookRegistry {
    /// Registered job definitions by type.
    jobs: HashMap<String, Arc<JobDefinition>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
        }
    }

    /// Register a job definition.
    pub fn register(&mut self, definition: JobDefinition) {
        let job_type = definition.job_type().to_string();
        tracing::info!("Registered job type '{}'", job_type);
        self.jobs.insert(job_type, Arc::new(definition));
    }

    /// Check if a job type is registered.
    pub fn has_job(&self, job_type: &str) -> bool {
        self.jobs.contains_key(job_type)
    }

    /// Get the list of registered job types.
    pub fn registered_types(&self) -> Vec<String> {
        self.jobs.keys().cloned().collect()
    }
}

impl JobResolver for HookRegistry {
    fn resolve(&self, job_type: &str) -> Option<Arc<JobDefinition>> {
        self.jobs.get(job_type).cloned()
    }
}
