//! Cooking mode: a [`CookingSession`] driven by a real clock.
//!
//! [`CookingMode`] is what a user interface holds while a recipe is open. It
//! exposes the five user intents (`next`, `previous`, `toggle_timer`,
//! `reset_timer`, `finalize`) and a [`CookingView`] snapshot to render.
//!
//! While the step timer is running, a single Tokio task ticks the session once
//! per interval. Any transition that stops or restarts the timer drops the
//! current [`TickHandle`](ticker::TickHandle) (aborting its task) before a new
//! one is spawned, so two tick sources never overlap. Ticks carry the session
//! generation they were started under; a tick that slips in after its source
//! was cancelled is ignored by the session.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use sous_core::{models::Step, mode::CookingModeBuilder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut mode = CookingModeBuilder::new()
//!     .with_tick_interval(Duration::from_millis(10))
//!     .build(vec![Step::new(1, "Chop"), Step::timed(2, "Simmer", 90)]);
//!
//! mode.next();
//! mode.toggle_timer();
//! assert!(mode.view().is_timer_running);
//! # }
//! ```

pub mod haptics;
mod ticker;


use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{info, warn};
use tokio::runtime::Handle;

pub use haptics::{Haptics, LogHaptics, VibrationPattern};
use ticker::TickHandle;

use crate::{
    error::SousError,
    models::Step,
    provider::RecipeProvider,
    session::{CookingSession, SessionExit},
    view::CookingView,
};

/// Default cadence of the countdown.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) fn lock_session(session: &Mutex<CookingSession>) -> MutexGuard<'_, CookingSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Outcome of loading a recipe into cooking mode.
pub enum LoadState {
    /// Steps are loaded and the session is ready to drive
    Ready(CookingMode),
    /// The recipe could not be fetched; show a "not ready" screen
    NotReady(SousError),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Builder for configuring [`CookingMode`] instances.
#[derive(Clone)]
pub struct CookingModeBuilder {
    tick_interval: Duration,
    haptics: Arc<dyn Haptics>,
}

impl CookingModeBuilder {
    /// Creates a builder with a one-second tick and log-only haptics.
    pub fn new() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            haptics: Arc::new(LogHaptics),
        }
    }

    /// Sets how much wall-clock time one countdown second takes.
    ///
    /// A zero interval is ignored.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.tick_interval = interval;
        }
        self
    }

    /// Sets the feedback fired when a step timer expires.
    pub fn with_haptics<H: Haptics + 'static>(mut self, haptics: H) -> Self {
        self.haptics = Arc::new(haptics);
        self
    }

    /// Sets shared expiry feedback.
    pub fn with_shared_haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Builds a cooking mode over `steps`, which may be unsorted or empty.
    pub fn build(self, steps: Vec<Step>) -> CookingMode {
        CookingMode {
            title: None,
            session: Arc::new(Mutex::new(CookingSession::new(steps))),
            tick_source: None,
            tick_interval: self.tick_interval,
            haptics: self.haptics,
        }
    }

    /// Fetches a recipe from `provider` and builds a cooking mode over its
    /// steps.
    ///
    /// Fetch failures never escape as errors; they become
    /// [`LoadState::NotReady`].
    pub async fn load<P: RecipeProvider>(self, provider: &P, recipe_id: u64) -> LoadState {
        match provider.fetch_recipe(recipe_id).await {
            Ok(recipe) => {
                info!(
                    "Loaded recipe {} '{}' with {} steps",
                    recipe.id,
                    recipe.title,
                    recipe.steps.len()
                );
                let mut mode = self.build(recipe.steps);
                mode.title = Some(recipe.title);
                LoadState::Ready(mode)
            }
            Err(e) => {
                if e.is_not_found() {
                    warn!("Recipe {recipe_id} not found");
                } else {
                    warn!("Failed to load recipe {recipe_id}: {e}");
                }
                LoadState::NotReady(e)
            }
        }
    }
}

impl Default for CookingModeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An open recipe in cooking mode.
///
/// Timer operations must run inside a Tokio runtime for the countdown to
/// advance. Outside one, starting the timer is refused and logged.
pub struct CookingMode {
    title: Option<String>,
    session: Arc<Mutex<CookingSession>>,
    tick_source: Option<TickHandle>,
    tick_interval: Duration,
    haptics: Arc<dyn Haptics>,
}

impl CookingMode {
    /// Builds a cooking mode with default settings.
    pub fn new(steps: Vec<Step>) -> Self {
        CookingModeBuilder::new().build(steps)
    }

    /// Advances to the next step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        self.apply(CookingSession::next)
    }

    /// Returns to the previous step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        self.apply(CookingSession::previous)
    }

    /// Starts or pauses the countdown. Returns whether it is now running.
    pub fn toggle_timer(&mut self) -> bool {
        self.apply(CookingSession::toggle_timer)
    }

    /// Stops the countdown and restores the current step's duration.
    pub fn reset_timer(&mut self) {
        self.apply(CookingSession::reset_timer);
    }

    /// Completes the current step and ends the walk-through.
    ///
    /// Returns `None` when the recipe has no steps.
    pub fn finalize(&mut self) -> Option<SessionExit> {
        let exit = self.apply(CookingSession::finalize);
        if let Some(exit) = exit {
            info!(
                "Cooking finished: {}/{} steps complete",
                exit.completed_steps, exit.total_steps
            );
        }
        exit
    }

    /// Snapshot of the session for rendering.
    pub fn view(&self) -> CookingView {
        let session = lock_session(&self.session);
        CookingView::from_session(self.title.as_deref(), &session)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether a tick task is currently alive.
    pub fn has_tick_source(&self) -> bool {
        self.tick_source
            .as_ref()
            .is_some_and(|handle| handle.generation() == lock_session(&self.session).generation())
    }

    /// Runs one session transition, then brings the tick source in line with
    /// the timer state.
    fn apply<T>(&mut self, op: impl FnOnce(&mut CookingSession) -> T) -> T {
        let (result, running, generation) = {
            let mut session = lock_session(&self.session);
            let result = op(&mut session);
            (result, session.timer().is_running(), session.generation())
        };
        self.sync_tick_source(running, generation);
        result
    }

    fn sync_tick_source(&mut self, running: bool, generation: u64) {
        let current = self
            .tick_source
            .as_ref()
            .is_some_and(|handle| handle.generation() == generation);
        if running && current {
            return;
        }

        // Tear down before starting anything new.
        self.tick_source = None;

        if !running {
            return;
        }

        match Handle::try_current() {
            Ok(runtime) => {
                self.tick_source = Some(TickHandle::spawn(
                    &runtime,
                    Arc::clone(&self.session),
                    generation,
                    self.tick_interval,
                    Arc::clone(&self.haptics),
                ));
            }
            Err(_) => {
                warn!("No async runtime available; step timer not started");
                lock_session(&self.session).toggle_timer();
            }
        }
    }
}

impl Drop for CookingMode {
    fn drop(&mut self) {
        // Abort any live tick task so it never ticks a discarded session.
        self.tick_source = None;
    }
}
