//! Kubernetes integration module.
//!
//! The operator runtime is split into three pieces:
//! - [`Manager`]: owns the Kubernetes client and the registered controllers
//! - [`Controller`]: a named group of watchers
//! - [`Watcher`]: registers watches for a controller; [`NodeWatcher`] is a placeholder

pub(crate) mod controller;
pub(crate) mod manager;
pub(crate) mod types;
pub(crate) mod watcher;

pub(crate) use controller::Controller;
pub(crate) use manager::Manager;
pub(crate) use types::OperatorError;
pub(crate) use watcher::NodeWatcher;
pub(crate) use watcher::Watcher;

#[cfg(test)]
pub(crate) mod testing {
    use kube::Client;

    /// Client pointed at a local address; building it never contacts a server.
    pub(crate) fn local_client() -> Client {
        Client::try_from(kube::Config::new("http://localhost:8080".parse().unwrap())).unwrap()
    }
}
