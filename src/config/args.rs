use super::toml_config::TomlConfig;
use super::BuildConfig;
use crate::domain::model::{DirectorySource, FilterMode};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "solar-directory")]
#[command(about = "Load, search and publish the solar company directory")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Where the language preference is kept
    #[arg(long, global = true)]
    pub state_dir: Option<String>,

    /// Request timeout for remote sources, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the static site
    Build(BuildArgs),
    /// Print the companies matching a query
    Search(SearchArgs),
    /// Estimate a basic system cost
    Calc {
        /// Appliance load in watts
        watts: String,
        /// Hours of use per day
        hours: String,
    },
    /// Show or switch the language preference
    Lang {
        /// Locale code to switch to, e.g. `sw`
        code: Option<String>,
    },
}

#[derive(Debug, Default, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Fetch the directory JSON from this URL
    #[arg(long)]
    pub url: Option<String>,

    /// Read the directory from a JSON file
    #[arg(long)]
    pub file: Option<String>,

    /// Read the directory from a CSV export
    #[arg(long)]
    pub csv: Option<String>,

    /// Use the built-in company list
    #[arg(long)]
    pub inline: bool,
}

impl SourceArgs {
    pub fn source(&self) -> Option<DirectorySource> {
        if let Some(url) = &self.url {
            Some(DirectorySource::Remote { url: url.clone() })
        } else if let Some(path) = &self.file {
            Some(DirectorySource::File { path: path.clone() })
        } else if let Some(path) = &self.csv {
            Some(DirectorySource::Csv { path: path.clone() })
        } else if self.inline {
            Some(DirectorySource::Inline)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory the site is written to
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// WhatsApp number the cards link to
    #[arg(long)]
    pub contact_number: Option<String>,

    /// Only list companies matching this text on the index page
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long, value_enum)]
    pub filter_mode: Option<FilterMode>,

    /// Also write site.zip
    #[arg(long)]
    pub zip: bool,

    /// Build in this language instead of the stored preference
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Text to look for; empty lists everything
    #[arg(default_value = "")]
    pub query: String,

    #[arg(long, value_enum)]
    pub filter_mode: Option<FilterMode>,

    /// Print the list HTML instead of plain text
    #[arg(long)]
    pub html: bool,
}

impl Cli {
    /// TOML file first, then flags on top.
    pub fn base_config(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                BuildConfig::from(toml)
            }
            None => BuildConfig::default(),
        };

        if let Some(dir) = &self.state_dir {
            config.state_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }

    pub fn build_config(&self, args: &BuildArgs) -> Result<BuildConfig> {
        let mut config = self.base_config()?;
        if let Some(source) = args.source.source() {
            config.source = source;
        }
        if let Some(path) = &args.output_path {
            config.output_path = path.clone();
        }
        if let Some(contact) = &args.contact_number {
            config.contact_number = contact.clone();
        }
        if args.query.is_some() {
            config.query = args.query.clone();
        }
        if let Some(mode) = args.filter_mode {
            config.filter_mode = mode;
        }
        if args.zip {
            config.bundle_zip = true;
        }
        Ok(config)
    }

    pub fn search_config(&self, args: &SearchArgs) -> Result<BuildConfig> {
        let mut config = self.base_config()?;
        if let Some(source) = args.source.source() {
            config.source = source;
        }
        if let Some(mode) = args.filter_mode {
            config.filter_mode = mode;
        }
        config.query = Some(args.query.clone());
        Ok(config)
    }
}
