use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{OutputFormat, Rod};
use crate::utils::error::Result;
use crate::utils::validation::{parse_disk_count, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hanoi")]
#[command(about = "Print the move sequence that solves the Tower of Hanoi")]
pub struct CliConfig {
    /// Number of disks (read from stdin when omitted)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub disks: Option<String>,

    /// Label of the rod the disks start on
    #[arg(long)]
    pub source: Option<String>,

    /// Label of the rod the disks end on
    #[arg(long)]
    pub destination: Option<String>,

    /// Label of the spare rod
    #[arg(long)]
    pub auxiliary: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Refuse disk counts above this value
    #[arg(long)]
    pub max_disks: Option<u32>,

    /// Replay every move against a tower model while printing
    #[arg(long)]
    pub verify: bool,

    #[arg(long, help = "Log CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併預設值、設定檔與命令列參數 (命令列優先)
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            file.apply_to(&mut settings)?;
        }

        if let Some(disks) = &self.disks {
            settings.disks = Some(parse_disk_count(disks)?);
        }
        if let Some(label) = &self.source {
            settings.source = Rod::parse("source", label)?;
        }
        if let Some(label) = &self.destination {
            settings.destination = Rod::parse("destination", label)?;
        }
        if let Some(label) = &self.auxiliary {
            settings.auxiliary = Rod::parse("auxiliary", label)?;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if let Some(max_disks) = self.max_disks {
            settings.max_disks = max_disks;
        }
        settings.verify |= self.verify;
        settings.monitor |= self.monitor;

        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
