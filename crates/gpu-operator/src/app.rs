use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::config::RunArgs;
use crate::k8s::Controller;
use crate::k8s::Manager;
use crate::k8s::NodeWatcher;

/// Name of the controller hosting the GPU node watcher.
pub(crate) const GPU_NODE_CONTROLLER: &str = "gpu-node";

/// Operator application: a manager with its controllers registered.
pub(crate) struct Application {
    manager: Manager,
    node_name: Option<String>,
}

impl Application {
    /// Connect to Kubernetes and register the operator's controllers.
    pub(crate) async fn build(args: RunArgs) -> Result<Self> {
        tracing::info!("Building operator manager...");

        let manager = Manager::new(args.kubeconfig, args.namespace)
            .await
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;

        Self::with_manager(manager, args.node_name)
    }

    fn with_manager(mut manager: Manager, node_name: Option<String>) -> Result<Self> {
        let controller = Controller::new(GPU_NODE_CONTROLLER).with_watcher(NodeWatcher {});
        tracing::info!(
            controller = controller.name(),
            watchers = ?controller.watcher_names(),
            "Registering controller"
        );
        manager
            .add_controller(controller)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;

        Ok(Self { manager, node_name })
    }

    /// Run until ctrl-c or until `token` is cancelled.
    pub(crate) async fn run(&self, token: CancellationToken) -> Result<()> {
        tracing::info!(
            namespace = self.manager.namespace(),
            controllers = self.manager.controllers().len(),
            node_name = ?self.node_name,
            "Starting operator"
        );

        let signal_task = {
            let token = token.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    result = tokio::signal::ctrl_c() => {
                        match result {
                            Ok(()) => tracing::info!("Received ctrl-c, shutting down"),
                            Err(e) => tracing::error!("Failed to listen for ctrl-c: {e}"),
                        }
                        token.cancel();
                    }
                }
            })
        };

        let result = self
            .manager
            .start(token.clone())
            .await
            .map_err(|e| anyhow::anyhow!("{e:?}"));

        token.cancel();
        if let Err(e) = signal_task.await {
            tracing::error!("Signal task failed: {e}");
        }

        tracing::info!("Operator run completed");
        result
    }
}
