use crate::core::solver::Moves;
use crate::core::towers::Towers;
use crate::core::MoveSink;
use crate::domain::model::{Rods, SolveSummary};
use crate::utils::error::{HanoiError, Result};
use crate::utils::monitor::SystemMonitor;

// 每隔這麼多步輸出一次進度 (debug)
const PROGRESS_INTERVAL: u64 = 1 << 20;

pub struct SolveEngine<S: MoveSink> {
    sink: S,
    rods: Rods,
    verify: bool,
    monitor: SystemMonitor,
}

impl<S: MoveSink> SolveEngine<S> {
    pub fn new(sink: S, rods: Rods) -> Self {
        Self {
            sink,
            rods,
            verify: false,
            monitor: SystemMonitor::new(false),
        }
    }

    /// Replay every move against a tower model while streaming.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor = SystemMonitor::new(enabled);
        if self.monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }
        self
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn run(&mut self, disks: u32) -> Result<SolveSummary> {
        let moves = Moves::new(disks, self.rods)?;
        tracing::info!(
            "🗼 Solving {} disks from {} to {} via {} ({} moves)",
            disks,
            self.rods.source(),
            self.rods.destination(),
            self.rods.auxiliary(),
            moves.remaining()
        );
        self.monitor.log_stats("Start");

        let mut towers = self.verify.then(|| Towers::new(disks, self.rods));
        self.sink.begin(disks)?;

        let mut written = 0u64;
        for mv in moves {
            if let Some(towers) = towers.as_mut() {
                towers.apply(&mv)?;
            }
            self.sink.write_move(&mv)?;
            written += 1;

            if written % PROGRESS_INTERVAL == 0 {
                tracing::debug!("Emitted {} moves", written);
                self.monitor.log_stats("Progress");
            }
        }
        self.sink.finish()?;

        if let Some(towers) = towers {
            if !towers.is_solved() {
                return Err(HanoiError::UnsolvedState { disks });
            }
            tracing::debug!("✅ Replay verified {} moves", written);
        }

        tracing::info!("✅ Emitted {} moves", written);
        self.monitor.log_final_stats();

        Ok(SolveSummary {
            disks,
            moves: written,
            verified: self.verify,
        })
    }
}
