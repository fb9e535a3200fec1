//! Game session state machine.
//!
//! A session owns the only mutable board in the game. Each turn it spawns
//! a tile, shows the board, and reads input until a legal move is made:
//!
//! ```text
//! Playing ──spawn──▶ render ──read──▶ move ──legal──▶ Playing
//!    │                  ▲              │ no-op / invalid
//!    │                  └──────────────┘ (re-prompt, no spawn)
//!    └──board full──▶ GameOver
//! ```
//!
//! A full board is detected at the top of a turn, before asking for input.

use crate::board::Board;
use crate::collaborator::{Input, InputEvent, Renderer, Status};
use crate::direction::Direction;
use crate::engine;
use crate::error::{MoveError, SpawnError};
use crate::spawn::spawn;
use rand::Rng;
use std::io;
use tracing::{debug, info, instrument, warn};

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionState {
    /// Turns are being played.
    Playing,
    /// No tile could be spawned. Terminal.
    GameOver,
}

/// How a call to [`GameSession::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The board filled up; "Game over" was reported.
    GameOver(Board),
    /// The player asked to leave. Nothing was reported; the caller exits.
    Quit(Board),
}

impl SessionOutcome {
    /// The board at the moment the session ended.
    pub fn board(&self) -> &Board {
        match self {
            SessionOutcome::GameOver(board) | SessionOutcome::Quit(board) => board,
        }
    }
}

/// Error that ends a session early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Reading input or rendering failed.
    #[display("Collaborator I/O failed: {}", _0)]
    Io(io::Error),
    /// A move broke a contract.
    #[display("{}", _0)]
    Move(MoveError),
    /// A spawn broke a contract.
    #[display("{}", _0)]
    Spawn(SpawnError),
}

impl std::error::Error for SessionError {}

/// A single game: one board, one random source.
#[derive(Debug, Clone)]
pub struct GameSession<R> {
    board: Board,
    state: SessionState,
    turns: u64,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Creates a session with an empty board.
    #[instrument(skip(rng))]
    pub fn new(rng: R) -> Self {
        Self::from_board(Board::EMPTY, rng)
    }

    /// Creates a session that starts from `board`.
    #[instrument(skip(rng))]
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            state: SessionState::Playing,
            turns: 0,
            rng,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of turns started, i.e. tiles spawned.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Starts a turn by spawning a tile.
    ///
    /// A full board moves the session to [`SessionState::GameOver`]; that
    /// state is terminal and later calls do nothing.
    #[instrument(skip(self), fields(turn = self.turns))]
    pub fn begin_turn(&mut self) -> Result<SessionState, SpawnError> {
        if self.state == SessionState::GameOver {
            return Ok(self.state);
        }

        match spawn(&self.board, &mut self.rng) {
            Ok(board) => {
                self.board = board;
                self.turns += 1;
                debug!(turn = self.turns, "Turn started");
            }
            Err(SpawnError::BoardFull) => {
                self.state = SessionState::GameOver;
                info!(
                    turns = self.turns,
                    highest_tile = self.board.highest_tile(),
                    "Board full, game over"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(self.state)
    }

    /// Applies a move to the current board.
    ///
    /// The board is only replaced when the move is legal. A no-op move
    /// leaves everything untouched and can be retried freely.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, direction: Direction) -> Result<(), MoveError> {
        if self.state == SessionState::GameOver {
            return Err(MoveError::GameOver);
        }
        self.board = engine::try_move(&self.board, direction)?;
        Ok(())
    }

    /// Plays turns until the game ends or the player quits.
    ///
    /// Unrecognized input re-prompts with the usage hint and an illegal move
    /// re-prompts with "Invalid move"; neither spawns a tile. "Game over" is
    /// reported once, and never on quit.
    #[instrument(skip_all)]
    pub fn run<I, D>(
        &mut self,
        input: &mut I,
        renderer: &mut D,
    ) -> Result<SessionOutcome, SessionError>
    where
        I: Input,
        D: Renderer,
    {
        if self.state == SessionState::GameOver {
            return Ok(SessionOutcome::GameOver(self.board));
        }

        loop {
            if self.begin_turn()? == SessionState::GameOver {
                renderer.render_status(&Status::GameOver)?;
                return Ok(SessionOutcome::GameOver(self.board));
            }
            renderer.render_board(&self.board)?;

            loop {
                match input.read_event()? {
                    InputEvent::Quit => {
                        info!(turns = self.turns, "Player quit");
                        return Ok(SessionOutcome::Quit(self.board));
                    }
                    InputEvent::Invalid(raw) => {
                        debug!(?raw, "Unrecognized input");
                        renderer.render_status(&input.usage())?;
                    }
                    InputEvent::Direction(direction) => match self.try_move(direction) {
                        Ok(()) => break,
                        Err(MoveError::NoOpMove(_)) => {
                            renderer.render_status(&Status::InvalidMove)?;
                        }
                        Err(e) => {
                            warn!(error = %e, "Move rejected");
                            return Err(e.into());
                        }
                    },
                }
            }
        }
    }
}
