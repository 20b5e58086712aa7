use crate::input::Direction;

struct Cursor {
    row: usize,
    col: usize,
}

/// The in-memory document: an ordered sequence of byte lines plus the cursor
/// the next edit applies at.
///
/// Invariants, held by every operation: `lines` is never empty,
/// `row < lines.len()`, and `col <= lines[row].len()`.
pub struct LineBuffer {
    lines: Vec<Vec<u8>>,
    cursor: Cursor,
}

impl LineBuffer {
    pub fn from_lines(lines: Vec<Vec<u8>>) -> Self {
        let lines = if lines.is_empty() {
            vec![Vec::new()]
        } else {
            lines
        };
        Self {
            lines,
            cursor: Cursor { row: 0, col: 0 },
        }
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.row, self.cursor.col)
    }

    pub fn insert_char(&mut self, ch: u8) {
        self.lines[self.cursor.row].insert(self.cursor.col, ch);
        self.cursor.col += 1;
    }

    /// Splits the current line at the cursor; the right half becomes a new
    /// line below and the cursor lands at its start.
    pub fn insert_newline(&mut self) {
        let rest = self.lines[self.cursor.row].split_off(self.cursor.col);
        self.lines.insert(self.cursor.row + 1, rest);
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Removes the byte before the cursor, merging with the previous line at
    /// a line start. A no-op at the very start of the buffer.
    pub fn delete_backward(&mut self) {
        if self.cursor.col > 0 {
            self.lines[self.cursor.row].remove(self.cursor.col - 1);
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            let tail = self.lines.remove(self.cursor.row);
            self.cursor.row -= 1;
            self.cursor.col = self.lines[self.cursor.row].len();
            self.lines[self.cursor.row].extend_from_slice(&tail);
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            Direction::Right => {
                if self.cursor.col < self.lines[self.cursor.row].len() {
                    self.cursor.col += 1;
                }
            }
            Direction::Up => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
                self.clamp_col();
            }
            Direction::Down => {
                if self.cursor.row + 1 < self.lines.len() {
                    self.cursor.row += 1;
                }
                self.clamp_col();
            }
        }
    }

    fn clamp_col(&mut self) {
        let len = self.lines[self.cursor.row].len();
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}
