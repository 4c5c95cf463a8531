use clap::Parser;
use std::path::PathBuf;

/// Renders kubernetes manifests as view components.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, env = "KVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Context the rendered objects belong to
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace for objects without one and for the list and navigation views
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Render a table of all objects of the kind instead of their configuration
    #[arg(long, short, value_name = "KIND", conflicts_with = "navigation")]
    pub list: Option<String>,

    /// Render the navigation tree for the namespace
    #[arg(long)]
    pub navigation: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// YAML manifests to render, each may contain multiple documents
    #[arg()]
    pub manifests: Vec<PathBuf>,
}

impl Args {
    /// Returns context or default if context is `None`.
    pub fn context<'a>(&'a self, default: &'a str) -> &'a str {
        self.context.as_deref().unwrap_or(default)
    }

    /// Returns namespace or `default` if namespace is `None`.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

pub const DEFAULT_NAMESPACE: &str = "default";
