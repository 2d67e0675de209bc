use thiserror::Error;

/// Errors that can occur while hosting controllers.
#[derive(Debug, Error)]
pub(crate) enum OperatorError {
    #[error("Failed to connect to Kubernetes API: {message}")]
    ConnectionFailed { message: String },
    #[error("Watcher `{watcher}` failed to register watches for controller `{controller}`")]
    WatchRegistrationFailed { controller: String, watcher: String },
    #[error("Controller `{name}` is already registered")]
    DuplicateController { name: String },
}
