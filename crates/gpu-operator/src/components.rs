//! Operator component identifiers and their application names.
//!
//! Every sub-application the operator deploys is identified by a [`Component`].
//! The application name doubles as the workload name and the value of the
//! `app` label on the component's pods.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Label key carrying the application name on component pods.
pub(crate) const APP_LABEL: &str = "app";

/// Managed operator sub-applications, in deployment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum Component {
    #[serde(rename = "nvidia-driver-daemonset")]
    Driver,
    #[serde(rename = "nvidia-container-toolkit-daemonset")]
    ContainerToolkit,
    #[serde(rename = "nvidia-device-plugin-daemonset")]
    DevicePlugin,
    #[serde(rename = "nvidia-dcgm")]
    Dcgm,
    #[serde(rename = "nvidia-dcgm-exporter")]
    DcgmExporter,
    #[serde(rename = "gpu-feature-discovery")]
    GpuFeatureDiscovery,
    #[serde(rename = "nvidia-mig-manager")]
    MigManager,
    #[serde(rename = "nvidia-node-status-exporter")]
    NodeStatusExporter,
    #[serde(rename = "nvidia-operator-validator")]
    Validator,
}

impl Component {
    /// All managed components.
    pub(crate) const ALL: [Component; 9] = [
        Component::Driver,
        Component::ContainerToolkit,
        Component::DevicePlugin,
        Component::Dcgm,
        Component::DcgmExporter,
        Component::GpuFeatureDiscovery,
        Component::MigManager,
        Component::NodeStatusExporter,
        Component::Validator,
    ];

    pub(crate) const fn app_name(self) -> &'static str {
        match self {
            Component::Driver => "nvidia-driver-daemonset",
            Component::ContainerToolkit => "nvidia-container-toolkit-daemonset",
            Component::DevicePlugin => "nvidia-device-plugin-daemonset",
            Component::Dcgm => "nvidia-dcgm",
            Component::DcgmExporter => "nvidia-dcgm-exporter",
            Component::GpuFeatureDiscovery => "gpu-feature-discovery",
            Component::MigManager => "nvidia-mig-manager",
            Component::NodeStatusExporter => "nvidia-node-status-exporter",
            Component::Validator => "nvidia-operator-validator",
        }
    }

    /// Short kebab-case identifier accepted on the command line.
    const fn short_name(self) -> &'static str {
        match self {
            Component::Driver => "driver",
            Component::ContainerToolkit => "container-toolkit",
            Component::DevicePlugin => "device-plugin",
            Component::Dcgm => "dcgm",
            Component::DcgmExporter => "dcgm-exporter",
            Component::GpuFeatureDiscovery => "gpu-feature-discovery",
            Component::MigManager => "mig-manager",
            Component::NodeStatusExporter => "node-status-exporter",
            Component::Validator => "validator",
        }
    }

    /// Reverse lookup from an exact application name.
    pub(crate) fn from_app_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|component| component.app_name() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.app_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown component `{0}`")]
pub(crate) struct ParseComponentError(String);

impl FromStr for Component {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::from_app_name(&wanted)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|component| component.short_name() == wanted)
            })
            .ok_or_else(|| ParseComponentError(s.to_string()))
    }
}

static APP_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    Component::ALL
        .iter()
        .map(|component| component.app_name().to_string())
        .collect()
});

/// Application name of `component`.
pub(crate) fn app_name(component: Component) -> String {
    component.app_name().to_string()
}

/// Application names of every managed component.
///
/// The returned vector is a fresh copy; callers may mutate it freely.
pub(crate) fn app_names() -> Vec<String> {
    APP_NAMES.clone()
}

/// Label selector matching the pods of `component`, e.g. `app=nvidia-dcgm`.
pub(crate) fn app_label_selector(component: Component) -> String {
    format!("{APP_LABEL}={}", component.app_name())
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn validator_app_name() {
        assert_eq!(app_name(Component::Validator), "nvidia-operator-validator");
    }

    #[test]
    fn app_names_returns_independent_copy() {
        let mut names = app_names();
        let original = names[0].clone();
        names[0] = "mutated".to_string();

        let fresh = app_names();
        assert_eq!(fresh[0], original);
        assert_eq!(fresh.len(), Component::ALL.len());
    }

    #[test]
    fn app_names_follow_component_order() {
        let expected: Vec<String> = Component::ALL.iter().map(|c| app_name(*c)).collect();
        assert_eq!(app_names(), expected);
        assert_eq!(app_names()[0], "nvidia-driver-daemonset");
    }

    #[test]
    fn app_names_are_unique() {
        let mut names = app_names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Component::ALL.len());
    }

    #[test]
    fn parse_accepts_short_and_app_names() {
        assert_eq!("validator".parse::<Component>(), Ok(Component::Validator));
        assert_eq!(" DCGM-Exporter ".parse::<Component>(), Ok(Component::DcgmExporter));
        assert_eq!(
            "nvidia-mig-manager".parse::<Component>(),
            Ok(Component::MigManager)
        );
        assert_eq!(
            "gpu-feature-discovery".parse::<Component>(),
            Ok(Component::GpuFeatureDiscovery)
        );
    }

    #[test]
    fn parse_rejects_unknown_component() {
        let err = "vfio-manager".parse::<Component>().unwrap_err();
        assert_eq!(err.to_string(), "unknown component `vfio-manager`");
    }

    #[test]
    fn from_app_name_is_exact() {
        assert_eq!(
            Component::from_app_name("nvidia-dcgm"),
            Some(Component::Dcgm)
        );
        assert_eq!(Component::from_app_name("dcgm"), None);
        assert_eq!(Component::from_app_name("NVIDIA-DCGM"), None);
    }

    #[test]
    fn display_and_serialize_use_app_name() {
        assert_eq!(
            Component::DevicePlugin.to_string(),
            "nvidia-device-plugin-daemonset"
        );
        for component in Component::ALL {
            let json = serde_json::to_string(&component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.app_name()));
        }
    }

    #[test]
    fn label_selector_uses_app_label() {
        assert_eq!(
            app_label_selector(Component::Validator),
            "app=nvidia-operator-validator"
        );
    }
}
