use crate::utils::error::{HanoiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單一字元的柱子標籤，除了身分之外沒有其他意義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rod(char);

impl Rod {
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    pub fn label(self) -> char {
        self.0
    }

    /// 從設定字串解析，必須剛好是一個非空白字元
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Self(c)),
            _ => Err(HanoiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Rod label must be exactly one non-whitespace character".to_string(),
            }),
        }
    }
}

impl fmt::Display for Rod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The (source, destination, auxiliary) triple. Labels are pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rods {
    source: Rod,
    destination: Rod,
    auxiliary: Rod,
}

impl Rods {
    pub fn new(source: Rod, destination: Rod, auxiliary: Rod) -> Result<Self> {
        let rods = [
            ("source", source),
            ("destination", destination),
            ("auxiliary", auxiliary),
        ];
        for (i, (field, rod)) in rods.iter().enumerate() {
            if let Some((other, _)) = rods[..i].iter().find(|(_, r)| r == rod) {
                return Err(HanoiError::InvalidConfigValueError {
                    field: format!("rods.{}", field),
                    value: rod.to_string(),
                    reason: format!("Same label as the {} rod", other),
                });
            }
        }

        Ok(Self {
            source,
            destination,
            auxiliary,
        })
    }

    pub fn source(&self) -> Rod {
        self.source
    }

    pub fn destination(&self) -> Rod {
        self.destination
    }

    pub fn auxiliary(&self) -> Rod {
        self.auxiliary
    }

    pub fn as_array(&self) -> [Rod; 3] {
        [self.source, self.destination, self.auxiliary]
    }
}

impl Default for Rods {
    fn default() -> Self {
        Self {
            source: Rod('A'),
            destination: Rod('C'),
            auxiliary: Rod('B'),
        }
    }
}

/// A single-disk move. `disk` is the size rank, 1 being the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub disk: u32,
    pub from: Rod,
    pub to: Rod,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 3] = ["text", "csv", "json"];
}

impl FromStr for OutputFormat {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(HanoiError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::VARIANTS.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveSummary {
    pub disks: u32,
    pub moves: u64,
    pub verified: bool,
}
