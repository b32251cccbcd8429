//! Frame of terminal cells the slider paints into.

use crate::types::{Rgb, Weight};

/// Background behind anything the slider has not painted.
pub const BLANK_BG: Rgb = Rgb::new(0, 0, 0);

const BLANK_FG: Rgb = Rgb::new(255, 255, 255);

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub weight: Weight,
    /// Covered by the right half of a wide char to its left.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::fill(BLANK_BG)
    }
}

impl Cell {
    /// An empty cell painted in `bg`.
    pub const fn fill(bg: Rgb) -> Self {
        Self {
            ch: ' ',
            fg: BLANK_FG,
            bg,
            weight: Weight::Normal,
            continuation: false,
        }
    }

    /// A visible character.
    pub const fn glyph(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Self {
            ch,
            fg,
            bg,
            weight: Weight::Normal,
            continuation: false,
        }
    }

    /// The cell hidden under a wide char's right half.
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            continuation: true,
            ..Self::fill(bg)
        }
    }

    pub const fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell; points outside the grid are dropped.
    pub fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Paint a column of `rows` cells starting at (x, y).
    pub fn fill_column(&mut self, x: u16, y: u16, rows: u16, bg: Rgb) {
        for row in y..y.saturating_add(rows) {
            self.put(x, row, Cell::fill(bg));
        }
    }

    /// Characters of one row, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.ch)
            .collect()
    }

    /// Cells that differ from `previous`, in row-major order.
    /// A buffer of another size counts as entirely changed.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let resized = self.size() != previous.size();
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .enumerate()
            .filter(move |(i, cell)| resized || previous.cells.get(*i) != Some(*cell))
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_outside_is_dropped() {
        let mut buf = Buffer::new(2, 1);
        buf.put(5, 0, Cell::glyph('x', BLANK_FG, BLANK_BG));
        assert_eq!(buf.row_text(0), "  ");
    }

    #[test]
    fn test_changes_only_differing_cells() {
        let previous = Buffer::new(3, 2);
        let mut current = Buffer::new(3, 2);
        current.put(2, 1, Cell::glyph('z', BLANK_FG, BLANK_BG));

        let changed: Vec<_> = current.changes(&previous).map(|(x, y, c)| (x, y, c.ch)).collect();
        assert_eq!(changed, vec![(2, 1, 'z')]);
    }

    #[test]
    fn test_changes_after_resize_covers_everything() {
        let previous = Buffer::new(1, 1);
        let current = Buffer::new(2, 2);
        assert_eq!(current.changes(&previous).count(), 4);
    }
}
