use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use utils::version;

use crate::components::Component;

#[derive(Parser)]
#[command(about, long_about, version = &**version::VERSION)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the operator manager
    Run(RunArgs),
    /// Print the application names of all managed components
    #[command(name = "app-names")]
    AppNames(OutputArgs),
    /// Print the application name of one component
    #[command(name = "app-name")]
    AppName(AppNameArgs),
}

#[derive(Parser)]
pub(crate) struct RunArgs {
    #[arg(
        long,
        env = "KUBECONFIG",
        value_hint = clap::ValueHint::FilePath,
        help = "Path to kubeconfig file (defaults to cluster config or ~/.kube/config)"
    )]
    pub(crate) kubeconfig: Option<PathBuf>,

    #[arg(
        long,
        env = "OPERATOR_NAMESPACE",
        default_value = "gpu-operator",
        help = "Namespace the operator components are deployed in"
    )]
    pub(crate) namespace: String,

    #[arg(
        long,
        env = "NODE_NAME",
        help = "Name of the node this operator instance runs on"
    )]
    pub(crate) node_name: Option<String>,
}

#[derive(Parser)]
pub(crate) struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
}

#[derive(Parser)]
pub(crate) struct AppNameArgs {
    #[arg(help = "Component, e.g. `validator` or `nvidia-operator-validator`")]
    pub(crate) component: Component,

    #[arg(
        long,
        help = "Print the pod label selector instead of the bare application name"
    )]
    pub(crate) label_selector: bool,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_app_name_with_short_component() {
        let cli = Cli::try_parse_from(["gpu-operator", "app-name", "validator"]).unwrap();
        match cli.command {
            Commands::AppName(args) => {
                assert_eq!(args.component, Component::Validator);
                assert_eq!(args.output.output, OutputFormat::Text);
                assert!(!args.label_selector);
            }
            _ => panic!("expected app-name"),
        }
    }

    #[test]
    fn rejects_unknown_component() {
        assert!(Cli::try_parse_from(["gpu-operator", "app-name", "nope"]).is_err());
    }

    #[test]
    fn parses_app_names_json() {
        let cli = Cli::try_parse_from(["gpu-operator", "app-names", "--output", "json"]).unwrap();
        match cli.command {
            Commands::AppNames(args) => assert_eq!(args.output, OutputFormat::Json),
            _ => panic!("expected app-names"),
        }
    }

    #[test]
    fn parses_run_arguments() {
        let cli = Cli::try_parse_from([
            "gpu-operator",
            "run",
            "--kubeconfig",
            "/tmp/kubeconfig",
            "--namespace",
            "nvidia",
            "--node-name",
            "gpu-node-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.kubeconfig, Some(PathBuf::from("/tmp/kubeconfig")));
                assert_eq!(args.namespace, "nvidia");
                assert_eq!(args.node_name.as_deref(), Some("gpu-node-1"));
            }
            _ => panic!("expected run"),
        }
    }
}
