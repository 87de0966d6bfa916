pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownSignal;
pub use state::{App, RunSummary, StopReason};

use anyhow::Result;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::model::engine::StepOutcome;

impl App {
    /// Drives the engine forward on a fixed ticker until it settles, reaches
    /// the generation limit or is interrupted. With `reverse` configured, the
    /// recorded history is then replayed backward until it runs out.
    pub async fn run(&self) -> Result<RunSummary> {
        self.shutdown.listen_for_ctrl_c();

        let forward = self.run_phase(false).await;
        let reverse = if self.config.simulation.reverse && forward != StopReason::Interrupted {
            Some(self.run_phase(true).await)
        } else {
            None
        };

        self.save_state()?;

        let summary = self.engine.with(|engine| RunSummary {
            forward,
            reverse,
            forward_steps: engine.metrics().forward_steps(),
            backward_steps: engine.metrics().backward_steps(),
            final_generation: engine.generation(),
            alive_cells: engine.count_alive_cells(),
        });
        tracing::info!(
            reason = ?summary.stop_reason(),
            generation = summary.final_generation,
            alive = summary.alive_cells,
            elapsed_ms = self.engine.with(|engine| engine.metrics().elapsed().as_millis() as u64),
            "Run finished"
        );
        Ok(summary)
    }

    async fn run_phase(&self, reverse: bool) -> StopReason {
        let period = Duration::from_millis(self.config.simulation.update_interval_ms.max(1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let limit = self.config.simulation.max_generations;
        let mut advanced = 0u64;
        self.engine.with(|engine| engine.start(reverse));

        let reason = loop {
            tokio::select! {
                biased;
                () = self.shutdown.requested() => break StopReason::Interrupted,
                _ = ticker.tick() => {}
            }
            let (outcome, running) = self.engine.with(|engine| (engine.update(), engine.is_running()));
            match outcome {
                // Paused from elsewhere: keep ticking.
                None if running => {}
                None => break StopReason::Stopped,
                Some(StepOutcome::Stable { .. }) => break StopReason::Stable,
                Some(StepOutcome::HistoryExhausted) => break StopReason::HistoryExhausted,
                Some(StepOutcome::Advanced { .. }) => {
                    advanced += 1;
                    if limit > 0 && advanced >= limit {
                        break StopReason::GenerationLimit;
                    }
                }
                Some(StepOutcome::Rewound { .. }) => {}
            }
        };

        self.engine.with(|engine| engine.stop());
        tracing::debug!(reverse = reverse, reason = ?reason, "Phase finished");
        reason
    }
}
