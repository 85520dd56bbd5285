use crate::config::Settings;
use crate::core::solver::MAX_DISKS;
use crate::domain::model::{OutputFormat, Rod};
use crate::utils::error::{HanoiError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub disks: Option<i64>,
    pub rods: Option<RodsConfig>,
    pub output: Option<OutputConfig>,
    pub limits: Option<LimitsConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RodsConfig {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub auxiliary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    pub max_disks: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub verify: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| HanoiError::ConfigValidationError {
                field: path.display().to_string(),
                message: format!("Cannot read config file: {}", e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HanoiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HANOI_DISKS})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn disk_count(&self) -> Result<Option<u32>> {
        self.disks
            .map(|n| validation::parse_disk_count(&n.to_string()))
            .transpose()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(|format| format.parse::<OutputFormat>())
            .transpose()
    }

    /// Overlays every value present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(disks) = self.disk_count()? {
            settings.disks = Some(disks);
        }

        if let Some(rods) = &self.rods {
            if let Some(label) = &rods.source {
                settings.source = Rod::parse("rods.source", label)?;
            }
            if let Some(label) = &rods.destination {
                settings.destination = Rod::parse("rods.destination", label)?;
            }
            if let Some(label) = &rods.auxiliary {
                settings.auxiliary = Rod::parse("rods.auxiliary", label)?;
            }
        }

        if let Some(format) = self.output_format()? {
            settings.output_format = format;
        }

        if let Some(max_disks) = self.limits.as_ref().and_then(|l| l.max_disks) {
            settings.max_disks = max_disks;
        }

        if let Some(monitoring) = &self.monitoring {
            settings.monitor = monitoring.enabled;
            if let Some(verify) = monitoring.verify {
                settings.verify = verify;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.disk_count()?;
        self.output_format()?;
        if let Some(max_disks) = self.limits.as_ref().and_then(|l| l.max_disks) {
            validation::validate_range("limits.max_disks", max_disks, 0, MAX_DISKS)?;
        }
        Ok(())
    }
}
