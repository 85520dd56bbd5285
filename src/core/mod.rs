pub mod engine;
pub mod solver;
pub mod towers;

pub use crate::domain::model::{Move, Rod, Rods, SolveSummary};
pub use crate::domain::ports::{ConfigProvider, MoveSink};
pub use crate::utils::error::Result;
