#[cfg(feature = "cli")]
pub mod cli;
pub mod input;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::solver::MAX_DISKS;
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, Rod, Rods};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Fully resolved run settings: defaults, then the config file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub disks: Option<u32>,
    pub source: Rod,
    pub destination: Rod,
    pub auxiliary: Rod,
    pub output_format: OutputFormat,
    pub max_disks: u32,
    pub verify: bool,
    pub monitor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let rods = Rods::default();
        Self {
            disks: None,
            source: rods.source(),
            destination: rods.destination(),
            auxiliary: rods.auxiliary(),
            output_format: OutputFormat::default(),
            max_disks: MAX_DISKS,
            verify: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn disks(&self) -> Option<u32> {
        self.disks
    }

    fn rods(&self) -> Result<Rods> {
        Rods::new(self.source, self.destination, self.auxiliary)
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn max_disks(&self) -> u32 {
        self.max_disks
    }

    fn verify(&self) -> bool {
        self.verify
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.rods()?;
        validation::validate_range("max_disks", self.max_disks, 0, MAX_DISKS)?;
        if let Some(disks) = self.disks {
            validation::validate_disk_limit(disks, self.max_disks)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.rods().unwrap(), Rods::default());
    }

    #[test]
    fn test_duplicate_rods_fail_validation() {
        let settings = Settings {
            auxiliary: Rod::new('A'),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_disks_above_limit_fail_validation() {
        let settings = Settings {
            disks: Some(12),
            max_disks: 10,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
