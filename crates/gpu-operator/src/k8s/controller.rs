use error_stack::Report;
use error_stack::ResultExt;
use tracing::debug;

use crate::k8s::Manager;
use crate::k8s::OperatorError;
use crate::k8s::Watcher;

/// A named group of watchers hosted by a [`Manager`].
pub(crate) struct Controller {
    name: String,
    watchers: Vec<Box<dyn Watcher>>,
}

impl Controller {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            watchers: Vec::new(),
        }
    }

    /// Add a watcher; watches are registered in insertion order.
    pub(crate) fn with_watcher(mut self, watcher: impl Watcher + 'static) -> Self {
        self.watchers.push(Box::new(watcher));
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn watcher_names(&self) -> Vec<&'static str> {
        self.watchers.iter().map(|watcher| watcher.name()).collect()
    }

    /// Let every watcher register its watches, returning how many did.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::WatchRegistrationFailed`] for the first watcher that fails
    pub(crate) fn register_watches(&self, manager: &Manager) -> Result<usize, Report<OperatorError>> {
        for watcher in &self.watchers {
            watcher
                .watch(manager, self)
                .change_context(OperatorError::WatchRegistrationFailed {
                    controller: self.name.clone(),
                    watcher: watcher.name().to_string(),
                })?;
            debug!(controller = %self.name, watcher = watcher.name(), "watches registered");
        }

        Ok(self.watchers.len())
    }
}
