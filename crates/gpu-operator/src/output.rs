//! Rendering for the naming subcommands.

use crate::components;
use crate::components::Component;
use crate::config::OutputFormat;

/// Render every managed application name, one per line or as a JSON array.
pub(crate) fn render_app_names(format: OutputFormat) -> serde_json::Result<String> {
    let names = components::app_names();
    match format {
        OutputFormat::Text => Ok(names.join("\n")),
        OutputFormat::Json => serde_json::to_string(&names),
    }
}

/// Render a single component's application name or label selector.
pub(crate) fn render_app_name(
    component: Component,
    label_selector: bool,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let value = if label_selector {
        components::app_label_selector(component)
    } else {
        components::app_name(component)
    };
    match format {
        OutputFormat::Text => Ok(value),
        OutputFormat::Json => serde_json::to_string(&value),
    }
}
