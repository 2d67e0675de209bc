use std::path::PathBuf;

use error_stack::Report;
use error_stack::ResultExt;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use kube::Client;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::k8s::Controller;
use crate::k8s::OperatorError;

/// Hosts controllers and hands them the shared Kubernetes client.
pub(crate) struct Manager {
    client: Client,
    namespace: String,
    controllers: Vec<Controller>,
}

impl Manager {
    /// Create a new manager.
    ///
    /// # Arguments
    ///
    /// * `kubeconfig` - Optional path to kubeconfig file (None for default config)
    /// * `namespace` - Namespace the operator's components live in
    ///
    /// # Errors
    ///
    /// - [`OperatorError::ConnectionFailed`] if unable to build a Kubernetes client
    pub(crate) async fn new(
        kubeconfig: Option<PathBuf>,
        namespace: String,
    ) -> Result<Self, Report<OperatorError>> {
        let client = match kubeconfig {
            Some(kubeconfig_path) => {
                let kubeconfig = Kubeconfig::read_from(&kubeconfig_path).change_context(
                    OperatorError::ConnectionFailed {
                        message: format!(
                            "Failed to read kubeconfig file: {}",
                            kubeconfig_path.display()
                        ),
                    },
                )?;

                let config =
                    kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await
                        .change_context(OperatorError::ConnectionFailed {
                            message: format!(
                                "Failed to create config from kubeconfig: {}",
                                kubeconfig_path.display()
                            ),
                        })?;

                Client::try_from(config).change_context(OperatorError::ConnectionFailed {
                    message: "Failed to create Kubernetes client from custom kubeconfig"
                        .to_string(),
                })?
            }
            // in-cluster or ~/.kube/config
            None => Client::try_default()
                .await
                .change_context(OperatorError::ConnectionFailed {
                    message: "Failed to create Kubernetes client".to_string(),
                })?,
        };

        Ok(Self::from_client(client, namespace))
    }

    pub(crate) fn from_client(client: Client, namespace: String) -> Self {
        Self {
            client,
            namespace,
            controllers: Vec::new(),
        }
    }

    pub(crate) fn namespace(&self) -> &str {
        &self.namespace
    }

    pub(crate) fn controllers(&self) -> &[Controller] {
        &self.controllers
    }

    /// Register a controller to be started with the manager.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::DuplicateController`] if a controller with the same name exists
    pub(crate) fn add_controller(
        &mut self,
        controller: Controller,
    ) -> Result<(), Report<OperatorError>> {
        if self
            .controllers
            .iter()
            .any(|existing| existing.name() == controller.name())
        {
            return Err(Report::new(OperatorError::DuplicateController {
                name: controller.name().to_string(),
            }));
        }

        self.controllers.push(controller);
        Ok(())
    }

    /// Register every controller's watches, then run until `token` is cancelled.
    ///
    /// # Errors
    ///
    /// - [`OperatorError::WatchRegistrationFailed`] if any watcher fails to register
    #[tracing::instrument(skip(self, token), fields(namespace = %self.namespace))]
    pub(crate) async fn start(&self, token: CancellationToken) -> Result<(), Report<OperatorError>> {
        info!(
            client_namespace = self.client.default_namespace(),
            controllers = self.controllers.len(),
            "Starting operator manager"
        );

        for controller in &self.controllers {
            let registered = controller.register_watches(self).attach_printable_lazy(|| {
                format!("while starting manager in namespace {}", self.namespace)
            })?;
            info!(
                controller = controller.name(),
                watchers = registered,
                "Controller watches registered"
            );
        }

        token.cancelled().await;
        info!("Operator manager shutdown requested");

        Ok(())
    }
}
