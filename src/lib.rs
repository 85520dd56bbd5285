pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Settings;
pub use crate::core::{engine::SolveEngine, solver::generate, solver::Moves, towers::Towers};
pub use domain::model::{Move, OutputFormat, Rod, Rods, SolveSummary};
pub use utils::error::{HanoiError, Result};
