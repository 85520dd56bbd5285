use crate::domain::model::{Move, OutputFormat, Rods};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn disks(&self) -> Option<u32>;
    fn rods(&self) -> Result<Rods>;
    fn output_format(&self) -> OutputFormat;
    fn max_disks(&self) -> u32;
    fn verify(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}

/// Destination for the move stream. Moves arrive in generation order.
pub trait MoveSink {
    fn begin(&mut self, _disks: u32) -> Result<()> {
        Ok(())
    }

    fn write_move(&mut self, mv: &Move) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}
