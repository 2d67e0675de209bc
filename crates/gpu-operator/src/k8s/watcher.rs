use error_stack::Report;

use crate::k8s::Controller;
use crate::k8s::Manager;
use crate::k8s::OperatorError;

/// Registers Kubernetes watches on behalf of a controller.
///
/// Called once per controller when the [`Manager`] starts.
pub(crate) trait Watcher: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Register this watcher's watches.
    ///
    /// # Errors
    ///
    /// Implementations report registration problems as [`OperatorError`].
    fn watch(
        &self,
        manager: &Manager,
        controller: &Controller,
    ) -> Result<(), Report<OperatorError>>;
}

/// Placeholder watcher for GPU nodes. Registers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct NodeWatcher {}

impl Watcher for NodeWatcher {
    fn name(&self) -> &'static str {
        "node"
    }

    fn watch(
        &self,
        _manager: &Manager,
        _controller: &Controller,
    ) -> Result<(), Report<OperatorError>> {
        Ok(())
    }
}
