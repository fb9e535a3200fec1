//! Boundaries between the game session and the outside world.
//!
//! The session never touches a terminal itself. It reads discrete
//! [`InputEvent`]s from an [`Input`] and hands boards and [`Status`]
//! messages to a [`Renderer`], so a terminal, a test harness feeding
//! scripted events, or anything else can drive it.

use crate::board::Board;
use crate::direction::Direction;
use std::io;

/// One discrete event from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Slide tiles in a direction.
    Direction(Direction),
    /// Leave the game immediately.
    Quit,
    /// Anything that is neither a direction nor quit, as received.
    Invalid(String),
}

/// Short message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The requested move would not change the board.
    #[display("Invalid move")]
    InvalidMove,

    /// Reminder of the key bindings after unrecognized input.
    #[display("Use {} to make a move or {} to quit.", moves, quit)]
    Usage {
        /// Keys that move, e.g. `WASD`.
        moves: String,
        /// Key that quits, e.g. `Q`.
        quit: String,
    },

    /// No tile can be spawned; the session is over.
    #[display("Game over")]
    GameOver,
}

/// Source of player input.
pub trait Input {
    /// Blocks until one event is available and returns it.
    fn read_event(&mut self) -> io::Result<InputEvent>;

    /// Describes the key bindings for [`Status::Usage`].
    fn usage(&self) -> Status;
}

/// Sink for board snapshots and status messages.
pub trait Renderer {
    /// Shows the current board.
    fn render_board(&mut self, board: &Board) -> io::Result<()>;

    /// Shows a status message.
    fn render_status(&mut self, status: &Status) -> io::Result<()>;
}
