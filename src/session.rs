//! Game session: the engine plus the delayed CPU opponent.

use crate::config::GameConfig;
use crate::games::tictactoe::{CpuMove, GameEngine, GameError, GameState, Symbol};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span, instrument, warn};

/// Engine and RNG, locked together so a CPU draw always sees the board it applies to.
#[derive(Debug)]
struct Shared {
    engine: GameEngine,
    rng: StdRng,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One interactive game session.
///
/// Wraps a [`GameEngine`] for use from async code. After each human move the
/// session checks whether the CPU is due and, if so, spawns a task that waits
/// the configured delay before placing the CPU's move. Every state change is
/// published to receivers from [`subscribe`](Self::subscribe).
///
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct GameSession {
    shared: Arc<Mutex<Shared>>,
    cpu_delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    updates: Arc<watch::Sender<GameState>>,
}

impl GameSession {
    /// Creates a session from configuration.
    ///
    /// Applies the configured CPU toggle and, when given, the player's symbol.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut engine = GameEngine::new();
        engine.set_cpu_enabled(*config.cpu_enabled())?;
        if let Some(symbol) = config.player_symbol() {
            engine.select_symbol(*symbol)?;
        }

        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };

        let (updates, _) = watch::channel(engine.state().clone());
        info!(
            cpu_enabled = config.cpu_enabled(),
            delay_ms = config.cpu_delay_ms(),
            seeded = config.seed().is_some(),
            "Creating game session"
        );

        Ok(Self {
            shared: Arc::new(Mutex::new(Shared { engine, rng })),
            cpu_delay: config.cpu_delay(),
            pending: Mutex::new(None),
            updates: Arc::new(updates),
        })
    }

    /// Current state.
    pub fn snapshot(&self) -> GameState {
        lock(&self.shared).engine.state().clone()
    }

    /// Receiver that sees every state change, including delayed CPU moves.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.updates.subscribe()
    }

    /// Delay applied before each CPU move.
    pub fn cpu_delay(&self) -> Duration {
        self.cpu_delay
    }

    /// Sets the human's symbol.
    #[instrument(skip(self))]
    pub fn select_symbol(&self, choice: Symbol) -> Result<GameState, GameError> {
        self.mutate(|engine| engine.select_symbol(choice).cloned())
    }

    /// Turns the CPU opponent on or off.
    #[instrument(skip(self))]
    pub fn set_cpu_enabled(&self, enabled: bool) -> Result<GameState, GameError> {
        self.mutate(|engine| engine.set_cpu_enabled(enabled).cloned())
    }

    /// Applies a human move, then schedules the CPU's reply if it is due.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, GameError> {
        let (state, ticket) = {
            let mut shared = lock(&self.shared);
            let Shared { engine, rng } = &mut *shared;
            engine.apply_move(index).map_err(|e| {
                warn!(index, error = %e, "Move rejected");
                e
            })?;

            let ticket = if engine.is_cpu_turn() {
                engine
                    .begin_cpu_move(rng)
                    .inspect_err(|e| debug!(error = %e, "CPU not moving"))
                    .ok()
            } else {
                None
            };
            (engine.state().clone(), ticket)
        };

        self.updates.send_replace(state.clone());
        if let Some(ticket) = ticket {
            self.schedule(ticket);
        }
        Ok(state)
    }

    /// Starts the next game once the current one has ended.
    ///
    /// A CPU move still waiting out its delay is cancelled.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<GameState, GameError> {
        let state = self.mutate(|engine| engine.reset().cloned())?;
        if let Some(handle) = lock(&self.pending).take() {
            debug!("Cancelling pending CPU move");
            handle.abort();
        }
        Ok(state)
    }

    /// Waits for the pending CPU move, if any, and returns the resulting state.
    #[instrument(skip(self))]
    pub async fn wait_for_cpu(&self) -> GameState {
        let handle = lock(&self.pending).take();
        if let Some(handle) = handle
            && let Err(e) = handle.await
            && !e.is_cancelled()
        {
            warn!(error = %e, "CPU move task failed");
        }
        self.snapshot()
    }

    fn mutate<F>(&self, op: F) -> Result<GameState, GameError>
    where
        F: FnOnce(&mut GameEngine) -> Result<GameState, GameError>,
    {
        let state = op(&mut lock(&self.shared).engine).map_err(|e| {
            warn!(error = %e, "Operation rejected");
            e
        })?;
        self.updates.send_replace(state.clone());
        Ok(state)
    }

    fn schedule(&self, ticket: CpuMove) {
        let shared = Arc::clone(&self.shared);
        let updates = Arc::clone(&self.updates);
        let delay = self.cpu_delay;
        let span = info_span!("cpu_move", symbol = %ticket.action().symbol, index = ticket.index());

        let handle = tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                let committed = lock(&shared).engine.commit_cpu_move(ticket).cloned();
                match committed {
                    Ok(state) => {
                        info!(outcome = ?state.outcome(), "CPU move placed");
                        updates.send_replace(state);
                    }
                    Err(e) => debug!(error = %e, "CPU move dropped"),
                }
            }
            .instrument(span),
        );

        if let Some(previous) = lock(&self.pending).replace(handle) {
            // Only a finished task can be here: the engine allows one CPU move at a time.
            previous.abort();
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.pending).take() {
            debug!("Session dropped with CPU move pending");
            handle.abort();
        }
    }
}
