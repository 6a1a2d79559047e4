//! `rosa nav` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use rosa_config::{CliSettings, Config};
use rosa_site::{ContentNode, NavigationNode};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Content tree JSON file (default: read from stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rosa.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Type tag of navigation containers (overrides config).
    #[arg(long)]
    container_type: Option<String>,

    /// Maximum content tree depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Pretty-print the resulting JSON.
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output (projection logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input parsing or projection fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            container_type: self.container_type,
            max_depth: self.max_depth,
            image_validation: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::info!(
            config_path = ?config.config_path,
            container_type = %config.navigation.container_type,
            max_depth = config.navigation.max_depth,
            "Configuration loaded"
        );

        let source = read_input(self.input.as_deref())?;
        let nav = project_source(&config, &source)?;

        if let Some(nav) = &nav {
            tracing::info!(node_count = nav.count(), depth = nav.depth(), "Navigation built");
        } else {
            output.warning(&format!(
                "Root node is not a {}; navigation is empty",
                config.navigation.container_type
            ));
        }

        output.result(&render(nav.as_ref(), self.pretty)?);
        Ok(())
    }
}

/// Read the content tree source from `path`, or stdin when absent.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

/// Parse a content tree document and project it with `config`.
fn project_source(config: &Config, source: &str) -> Result<Option<NavigationNode>, CliError> {
    let tree: ContentNode = serde_json::from_str(source)?;
    Ok(config.projector().project(&tree)?)
}

/// Serialize a projection result; a removed root renders as `null`.
fn render(nav: Option<&NavigationNode>, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(&nav)?
    } else {
        serde_json::to_string(&nav)?
    };
    Ok(json)
}
