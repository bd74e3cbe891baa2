//! Ordered hook collections per job type.

use std::sync::Arc;

use crate::hook::{AfterHook, AroundHook, BeforeHook};

/// The three ordered hook sequences defined for a job type.
///
/// Built once at registration time and read-only during execution. Ordering
/// is stable: hooks run in the order they were appended, on every invocation
/// of the job type.
#[derive(Debug, Clone, Default)]
pub struct HookSet {
    before: Vec<Arc<dyn BeforeHook>>,
    around: Vec<Arc<dyn AroundHook>>,
    after: Vec<Arc<dyn AfterHook>>,
}

impl HookSet {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a before hook.
    pub fn push_before(&mut self, hook: Arc<dyn BeforeHook>) {
        self.before.push(hook);
    }

    /// Append an around hook. The first appended hook is outermost.
    pub fn push_around(&mut self, hook: Arc<dyn AroundHook>) {
        self.around.push(hook);
    }

    /// Append an after hook.
    pub fn push_after(&mut self, hook: Arc<dyn AfterHook>) {
        self.after.push(hook);
    }

    /// The before hooks, in execution order.
    pub fn before(&self) -> &[Arc<dyn BeforeHook>] {
        &self.before
    }

    /// The around hooks, outermost first.
    pub fn around(&self) -> &[Arc<dyn AroundHook>] {
        &self.around
    }

    /// The after hooks, in execution order.
    pub fn after(&self) -> &[Arc<dyn AfterHook>] {
        &self.after
    }

    /// Whether no hooks are defined in any category.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.around.is_empty() && self.after.is_empty()
    }
}
