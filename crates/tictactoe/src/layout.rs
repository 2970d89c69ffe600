//! Screen geometry shared by rendering and mouse input.
//!
//! The renderer draws each cell into the rectangle computed here, and a
//! click is mapped back to a cell index with the same rectangles, so what
//! the player sees is what they hit.

use ratatui::layout::{Constraint, Layout, Rect};
use tictactoe_core::CELL_COUNT;

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 13;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the board: three cells and two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the board: three cells and two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// The areas of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the frame area into title, board, status, and help.
    ///
    /// The board takes what is left after the fixed rows, so the status line
    /// stays visible on short terminals.
    pub fn new(area: Rect) -> Self {
        let [title, board, status, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(area);

        Self {
            title,
            board,
            status,
            help,
        }
    }
}

/// Rectangles of the 9 cells, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    grid: Rect,
    cells: [Rect; CELL_COUNT],
}

impl BoardLayout {
    /// Lays the board out in the middle of `area`.
    ///
    /// Cells are clipped to the grid, and the grid to `area`, so a small
    /// terminal shows part of the board instead of drawing out of bounds.
    pub fn new(area: Rect) -> Self {
        let grid = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|index| {
            let row = (index / 3) as u16;
            let col = (index % 3) as u16;
            Rect::new(
                grid.x.saturating_add(col * (CELL_WIDTH + 1)),
                grid.y.saturating_add(row * (CELL_HEIGHT + 1)),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self { grid, cells }
    }

    /// Lays the board out for a whole frame.
    pub fn for_screen(area: Rect) -> Self {
        Self::new(ScreenLayout::new(area).board)
    }

    /// Bounding rectangle of the board, separators included.
    pub fn grid(&self) -> Rect {
        self.grid
    }

    /// The two horizontal and two vertical separator lines, clipped to the
    /// grid.
    pub fn separators(&self) -> [Rect; 4] {
        let grid = self.grid;
        let horizontal = |k: u16| {
            let y = grid.y.saturating_add(CELL_HEIGHT + k * (CELL_HEIGHT + 1));
            Rect::new(grid.x, y, grid.width, 1).intersection(grid)
        };
        let vertical = |k: u16| {
            let x = grid.x.saturating_add(CELL_WIDTH + k * (CELL_WIDTH + 1));
            Rect::new(x, grid.y, 1, grid.height).intersection(grid)
        };
        [horizontal(0), horizontal(1), vertical(0), vertical(1)]
    }

    /// Rectangle of the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<Rect> {
        self.cells.get(index).copied()
    }

    /// Maps a terminal coordinate to the cell under it.
    ///
    /// Separators and everything outside the board map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ratatui::layout::Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(point))
    }
}

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
