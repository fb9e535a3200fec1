//! Plain-text board rendering with box-drawing characters.

use std::io::{self, Write};
use strictly_2048::{Board, Renderer, SIZE, Status};
use tracing::instrument;

/// Character width of one cell.
const CELL_WIDTH: usize = 4;

/// Builds one horizontal rule, e.g. `╔════╦════╦════╦════╗`.
fn rule(left: char, middle: char, right: char) -> String {
    let segment = "═".repeat(CELL_WIDTH);
    let mut line = String::new();
    line.push(left);
    for col in 0..SIZE {
        if col > 0 {
            line.push(middle);
        }
        line.push_str(&segment);
    }
    line.push(right);
    line
}

/// Formats a board as a box-drawn grid.
///
/// Tiles are centred in their cells and empty cells are left blank.
/// The result has no trailing newline.
pub fn format_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    0 => " ".repeat(CELL_WIDTH),
                    t => format!("{:^width$}", t, width = CELL_WIDTH),
                })
                .collect();
            format!("║{}║", cells.join("║"))
        })
        .collect();

    let separator = format!("\n{}\n", rule('╠', '╬', '╣'));
    [
        rule('╔', '╦', '╗'),
        rows.join(&separator),
        rule('╚', '╩', '╝'),
    ]
    .join("\n")
}

/// Writes boards and status lines to any [`Write`] sink, usually stdout.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    #[instrument(skip(self, board))]
    fn render_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_board(board))?;
        self.out.flush()
    }

    #[instrument(skip(self))]
    fn render_status(&mut self, status: &Status) -> io::Result<()> {
        writeln!(self.out, "{}", status)?;
        self.out.flush()
    }
}
