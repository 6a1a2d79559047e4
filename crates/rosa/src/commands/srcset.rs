//! `rosa srcset` command implementation.

use std::path::PathBuf;

use clap::Args;
use rosa_config::{CliSettings, Config};
use rosa_site::{ImageRef, ImageValidation};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the srcset command.
#[derive(Args)]
pub(crate) struct SrcsetArgs {
    /// Image URL to build descriptors for.
    url: String,

    /// Alternative text, included with --attributes.
    #[arg(long)]
    alt: Option<String>,

    /// Print `src`, `srcset` and `alt` as JSON instead of the bare srcset.
    #[arg(long)]
    attributes: bool,

    /// Reject blank image URLs (overrides config).
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover rosa.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SrcsetArgs {
    /// Execute the srcset command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or strict validation rejects
    /// the image.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            image_validation: self.strict.then_some(ImageValidation::Strict),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let builder = config.srcset_builder();
        tracing::info!(
            config_path = ?config.config_path,
            validation = ?builder.validation(),
            "Building srcset"
        );

        let image = ImageRef {
            url: self.url,
            alt: self.alt,
        };

        if self.attributes {
            let attrs = builder.img_attributes(&image)?;
            output.result(&serde_json::to_string(&attrs)?);
        } else {
            output.result(&builder.build(&image)?);
        }
        Ok(())
    }
}
