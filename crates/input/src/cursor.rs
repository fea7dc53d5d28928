//! Card cursor on the grid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Position of the highlighted card, clamped to the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    len: usize,
    columns: usize,
}

impl GridCursor {
    pub fn new(len: usize, columns: usize) -> Self {
        Self {
            index: 0,
            len,
            columns: columns.max(1),
        }
    }

    /// Deck position under the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / self.columns
    }

    pub fn column(&self) -> usize {
        self.index % self.columns
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move one cell. Returns false at an edge.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.len == 0 {
            return false;
        }

        let next = match direction {
            Direction::Left if self.column() > 0 => self.index - 1,
            Direction::Right if self.column() + 1 < self.columns => self.index + 1,
            Direction::Up if self.index >= self.columns => self.index - self.columns,
            Direction::Down => self.index + self.columns,
            _ => return false,
        };

        if next >= self.len {
            return false;
        }
        self.index = next;
        true
    }
}
