//! Tests for the game session turn loop with scripted collaborators.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::io;
use strictly_2048::{
    Board, Direction, GameSession, Input, InputEvent, Renderer, SIZE, SessionError,
    SessionOutcome, SessionState, Status,
};

/// Input that replays a fixed list of events, then fails.
struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn usage(&self) -> Status {
        Status::Usage {
            moves: "WASD".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Board(Board),
    Status(Status),
}

/// Renderer that records everything it is shown.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    fn statuses(&self) -> Vec<&Status> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Frame::Status(s) => Some(s),
                Frame::Board(_) => None,
            })
            .collect()
    }

    fn boards(&self) -> Vec<&Board> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Frame::Board(b) => Some(b),
                Frame::Status(_) => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, board: &Board) -> io::Result<()> {
        self.frames.push(Frame::Board(*board));
        Ok(())
    }

    fn render_status(&mut self, status: &Status) -> io::Result<()> {
        self.frames.push(Frame::Status(status.clone()));
        Ok(())
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2048)
}

fn full_board() -> Board {
    Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

#[test]
fn test_quit_returns_without_game_over() {
    let mut session = GameSession::new(rng());
    let mut input = ScriptedInput::new([InputEvent::Quit]);
    let mut renderer = RecordingRenderer::default();

    let outcome = session.run(&mut input, &mut renderer).unwrap();

    assert!(matches!(outcome, SessionOutcome::Quit(_)));
    assert_eq!(outcome.board().tile_count(), 1);
    assert_eq!(renderer.boards().len(), 1);
    assert!(renderer.statuses().is_empty());
    assert_eq!(session.state(), SessionState::Playing);
}

#[test]
fn test_invalid_input_reprompts_without_spawning() {
    let mut session = GameSession::new(rng());
    let mut input = ScriptedInput::new([
        InputEvent::Invalid("x".to_string()),
        InputEvent::Invalid("7".to_string()),
        InputEvent::Quit,
    ]);
    let mut renderer = RecordingRenderer::default();

    session.run(&mut input, &mut renderer).unwrap();

    assert_eq!(session.turns(), 1);
    assert_eq!(renderer.boards().len(), 1);
    let usage = input.usage();
    assert_eq!(renderer.statuses(), vec![&usage, &usage]);
}

#[test]
fn test_no_op_move_reports_invalid_and_keeps_turn() {
    // One empty corner cell whose neighbours are 64 and 32: whatever spawns
    // there, the full board has no pairs.
    let start = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 64], [8, 16, 32, 0]]);
    let mut session = GameSession::from_board(start, rng());
    let mut input = ScriptedInput::new([
        InputEvent::Direction(Direction::Up),
        InputEvent::Quit,
    ]);
    let mut renderer = RecordingRenderer::default();

    let outcome = session.run(&mut input, &mut renderer).unwrap();

    assert!(matches!(outcome, SessionOutcome::Quit(_)));
    assert_eq!(session.turns(), 1);
    assert_eq!(renderer.statuses(), vec![&Status::InvalidMove]);
    assert_eq!(renderer.boards().len(), 1);
    assert!(session.board().is_full());
}

#[test]
fn test_legal_move_starts_next_turn() {
    let mut session = GameSession::new(rng());
    let mut input = ScriptedInput::new(
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
            .into_iter()
            .map(InputEvent::Direction)
            .chain([InputEvent::Quit]),
    );
    let mut renderer = RecordingRenderer::default();

    session.run(&mut input, &mut renderer).unwrap();

    let boards = renderer.boards();
    // One render per turn; every turn adds a tile or the move was rejected.
    assert_eq!(boards.len() as u64, session.turns());
    for pair in boards.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    for status in renderer.statuses() {
        assert_eq!(status, &Status::InvalidMove);
    }
}

#[test]
fn test_full_board_reports_game_over_once_before_input() {
    let mut session = GameSession::from_board(full_board(), rng());
    let mut input = ScriptedInput::new(Vec::<InputEvent>::new());
    let mut renderer = RecordingRenderer::default();

    let outcome = session.run(&mut input, &mut renderer).unwrap();

    assert_eq!(outcome, SessionOutcome::GameOver(full_board()));
    assert_eq!(renderer.frames, vec![Frame::Status(Status::GameOver)]);
    assert_eq!(session.state(), SessionState::GameOver);

    // Terminal: running again reports nothing new.
    let again = session.run(&mut input, &mut renderer).unwrap();
    assert_eq!(again, SessionOutcome::GameOver(full_board()));
    assert_eq!(renderer.frames.len(), 1);
}

#[test]
fn test_stuck_board_waits_for_quit() {
    // The last empty cell is surrounded by tiles other than 2 and 4, so the
    // spawned tile leaves a full board with no legal move. Game over is only
    // detected at the top of the next turn, which never comes.
    let mut rows = [[0; SIZE]; SIZE];
    rows[0] = [2, 4, 2, 4];
    rows[1] = [4, 2, 4, 2];
    rows[2] = [2, 4, 128, 4];
    rows[3] = [8, 16, 0, 64];
    let mut session = GameSession::from_board(Board::from_rows(rows), rng());
    let mut input = ScriptedInput::new(
        Direction::ALL
            .into_iter()
            .map(InputEvent::Direction)
            .chain([InputEvent::Quit]),
    );
    let mut renderer = RecordingRenderer::default();

    let outcome = session.run(&mut input, &mut renderer).unwrap();

    assert!(matches!(outcome, SessionOutcome::Quit(board) if board.is_full()));
    assert_eq!(renderer.statuses(), vec![&Status::InvalidMove; 4]);
    assert_eq!(session.state(), SessionState::Playing);
}

#[test]
fn test_input_failure_ends_session() {
    let mut session = GameSession::new(rng());
    let mut input = ScriptedInput::new(Vec::<InputEvent>::new());
    let mut renderer = RecordingRenderer::default();

    let err = session.run(&mut input, &mut renderer).unwrap_err();
    assert!(matches!(err, SessionError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
}
