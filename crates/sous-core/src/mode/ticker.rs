//! The recurring tick source behind a running step timer.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use log::{debug, info};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{self, Instant},
};

use super::{haptics::VibrationPattern, lock_session, Haptics};
use crate::session::{CookingSession, TickOutcome};

/// A live tick task. Dropping the handle aborts the task.
pub(crate) struct TickHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickHandle {
    /// Spawns a task that delivers one tick per `period`, tagged with
    /// `generation`, until the session rejects a tick or the timer expires.
    pub(crate) fn spawn(
        runtime: &Handle,
        session: Arc<Mutex<CookingSession>>,
        generation: u64,
        period: Duration,
        haptics: Arc<dyn Haptics>,
    ) -> Self {
        // The first tick lands one full period after the timer starts.
        let start = Instant::now() + period;

        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(start, period);
            loop {
                interval.tick().await;

                let outcome = lock_session(&session).tick(generation);
                match outcome {
                    TickOutcome::Ticked { .. } => {}
                    TickOutcome::Expired => {
                        info!("Step timer expired");
                        haptics.vibrate(VibrationPattern::TIMER_EXPIRED);
                        break;
                    }
                    TickOutcome::Ignored => {
                        debug!("Tick source {generation} is stale, stopping");
                        break;
                    }
                }
            }
        });

        Self { generation, task }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
