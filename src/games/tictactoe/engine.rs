//! The tic-tac-toe state machine.
//!
//! [`GameEngine`] owns one [`GameState`] for the whole session. Every
//! operation either succeeds and returns the new state, or fails with a
//! [`GameError`] and leaves the state exactly as it was.
//!
//! CPU moves are split in two so the caller can put a delay between choosing
//! a cell and placing it. While a choice is pending the engine refuses other
//! moves, and a reset invalidates the pending choice.

use super::action::{CpuMove, GameError, InvalidMove, Move};
use super::invariants;
use super::rules::terminal_check;
use super::{Board, GameState, Position, Square, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Single-session tic-tac-toe engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    /// Bumped on every reset; pending CPU moves carry the value they were drawn under.
    generation: u64,
}

impl GameEngine {
    /// Creates an engine with an empty board, O to move, CPU off.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays human moves from a fresh engine with the given opener.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(opener: Symbol, indices: &[usize]) -> Result<Self, GameError> {
        let mut engine = Self::new();
        engine.select_symbol(opener)?;
        for &index in indices {
            engine.apply_move(index)?;
        }
        Ok(engine)
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of resets so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Setup can change only before the first move of a game or after it ends.
    fn setup_locked(&self) -> bool {
        !self.state.board.is_blank() && !self.state.is_over()
    }

    /// The CPU's symbol, when the CPU is playing.
    fn active_cpu_symbol(&self) -> Option<Symbol> {
        self.state.cpu_symbol().filter(|_| self.state.cpu_enabled)
    }

    /// True when the CPU is playing and holds the move.
    pub fn is_cpu_turn(&self) -> bool {
        self.active_cpu_symbol() == Some(self.state.turn)
    }

    /// Fixes the human's symbol; that symbol opens every game.
    ///
    /// # Errors
    ///
    /// [`GameError::GameInProgress`] once a move has been made in the current game.
    #[instrument(skip(self))]
    pub fn select_symbol(&mut self, choice: Symbol) -> Result<&GameState, GameError> {
        if self.setup_locked() {
            debug!("Symbol change refused mid-game");
            return Err(GameError::GameInProgress);
        }
        self.state.player_choice = Some(choice);
        self.state.turn = choice;
        info!(%choice, cpu = ?self.state.cpu_symbol(), "Symbol selected");
        self.verify();
        Ok(&self.state)
    }

    /// Turns the CPU opponent on or off.
    ///
    /// # Errors
    ///
    /// [`GameError::GameInProgress`] once a move has been made in the current game.
    #[instrument(skip(self))]
    pub fn set_cpu_enabled(&mut self, enabled: bool) -> Result<&GameState, GameError> {
        if self.setup_locked() {
            debug!("CPU toggle refused mid-game");
            return Err(GameError::GameInProgress);
        }
        self.state.cpu_enabled = enabled;
        info!(enabled, "CPU opponent toggled");
        Ok(&self.state)
    }

    /// Places the current turn's symbol at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::OutOfRange`] for an index past 8
    /// - [`GameError::GameAlreadyOver`] after a win or draw
    /// - [`GameError::CpuThinking`] while a CPU move is pending
    /// - [`GameError::NotYourTurn`] when the CPU holds the move
    /// - [`InvalidMove::Occupied`] for a taken square
    #[instrument(skip(self), fields(turn = %self.state.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<&GameState, GameError> {
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.state.cpu_moving {
            return Err(GameError::CpuThinking);
        }
        if self.is_cpu_turn() {
            return Err(GameError::NotYourTurn(self.state.turn));
        }
        self.place(Move::new(self.state.turn, position))?;
        Ok(&self.state)
    }

    /// Picks a uniformly random empty square for the CPU and marks the move pending.
    ///
    /// The returned ticket must be passed to [`commit_cpu_move`](Self::commit_cpu_move).
    ///
    /// # Errors
    ///
    /// [`GameError::CpuDisabled`], [`GameError::GameAlreadyOver`],
    /// [`GameError::NotCpuTurn`], [`GameError::CpuCannotOpen`] or
    /// [`GameError::CpuThinking`] when the CPU may not move now.
    #[instrument(skip(self, rng))]
    pub fn begin_cpu_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<CpuMove, GameError> {
        let symbol = self.active_cpu_symbol().ok_or(GameError::CpuDisabled)?;
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.state.turn != symbol {
            return Err(GameError::NotCpuTurn);
        }
        if self.state.board.is_blank() {
            return Err(GameError::CpuCannotOpen);
        }
        if self.state.cpu_moving {
            return Err(GameError::CpuThinking);
        }

        let open = Position::valid_moves(&self.state.board);
        let position = *open.choose(rng).ok_or(InvalidMove::NoEmptyCells)?;

        self.state.cpu_moving = true;
        debug!(%symbol, %position, candidates = open.len(), "CPU chose a square");
        Ok(CpuMove {
            action: Move::new(symbol, position),
            generation: self.generation,
        })
    }

    /// Places a CPU move chosen by [`begin_cpu_move`](Self::begin_cpu_move).
    ///
    /// # Errors
    ///
    /// [`GameError::StaleCpuMove`] if the game was reset since the ticket was
    /// issued or the ticket was already used.
    #[instrument(skip(self))]
    pub fn commit_cpu_move(&mut self, ticket: CpuMove) -> Result<&GameState, GameError> {
        if ticket.generation != self.generation || !self.state.cpu_moving {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "Dropping stale CPU move"
            );
            return Err(GameError::StaleCpuMove);
        }
        // Released before placing so a failed placement cannot wedge the CPU.
        self.state.cpu_moving = false;
        self.place(ticket.action)?;
        Ok(&self.state)
    }

    /// Chooses and places a CPU move with no delay.
    #[instrument(skip(self, rng))]
    pub fn cpu_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&GameState, GameError> {
        let ticket = self.begin_cpu_move(rng)?;
        self.commit_cpu_move(ticket)
    }

    /// Clears the board for a new game once the current one has ended.
    ///
    /// History, the chosen symbol and the CPU setting carry over. Any pending
    /// CPU move is invalidated.
    ///
    /// # Errors
    ///
    /// [`GameError::NotTerminal`] while the game is still being played.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<&GameState, GameError> {
        if !self.state.is_over() {
            return Err(GameError::NotTerminal);
        }
        self.state.board = Board::new();
        self.state.outcome = None;
        self.state.turn = self.state.opener();
        self.state.cpu_moving = false;
        self.generation = self.generation.wrapping_add(1);
        info!(
            generation = self.generation,
            games_played = self.state.history.len(),
            "Board reset"
        );
        self.verify();
        Ok(&self.state)
    }

    /// Writes a move to the board, advances the turn and records any result.
    fn place(&mut self, action: Move) -> Result<(), GameError> {
        if !self.state.board.is_empty(action.position) {
            return Err(InvalidMove::Occupied(action.position).into());
        }
        self.state
            .board
            .set(action.position, Square::Occupied(action.symbol));
        self.state.turn = action.symbol.opponent();
        debug!(%action, "Move placed");

        if let Some(outcome) = terminal_check(&self.state.board) {
            info!(%outcome, "Game over");
            self.state.outcome = Some(outcome);
            self.state.history.push(outcome);
        }

        self.verify();
        Ok(())
    }

    fn verify(&self) {
        debug_assert!(
            invariants::violations(&self.state).is_none(),
            "Invariant violation: {:?}",
            invariants::violations(&self.state)
        );
    }
}
