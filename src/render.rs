use std::io::{self, Write};

use crate::buffer::LineBuffer;

/// One full redraw: clear and home, every buffer line followed by CRLF, the
/// status line, then the real cursor moved onto the logical cursor
/// (terminal coordinates are 1-indexed). No partial updates.
pub fn draw(out: &mut impl Write, buffer: &LineBuffer, filename: &str) -> io::Result<()> {
    out.write_all(b"\x1b[2J")?;
    out.write_all(b"\x1b[H")?;
    for line in buffer.lines() {
        out.write_all(line)?;
        out.write_all(b"\r\n")?;
    }
    write!(
        out,
        "-- scrawl --  File: {filename}  | Ctrl+S Save | Ctrl+Q Quit --"
    )?;
    let (row, col) = buffer.cursor();
    write!(out, "\x1b[{};{}H", row + 1, col + 1)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;

    #[test]
    fn emits_clear_lines_status_and_cursor_move() {
        let mut buf = LineBuffer::from_lines(vec![b"ab".to_vec(), b"c".to_vec()]);
        buf.move_cursor(Direction::Right);
        let mut out = Vec::new();
        draw(&mut out, &buf, "notes.txt").unwrap();
        let expected = "\x1b[2J\x1b[H\
                        ab\r\nc\r\n\
                        -- scrawl --  File: notes.txt  | Ctrl+S Save | Ctrl+Q Quit --\
                        \x1b[1;2H";
        assert_eq!(out, expected.as_bytes());
    }

    #[test]
    fn cursor_sequence_is_one_indexed() {
        let buf = LineBuffer::from_lines(vec![b"x".to_vec()]);
        let mut out = Vec::new();
        draw(&mut out, &buf, "f").unwrap();
        assert!(out.ends_with(b"\x1b[1;1H"));
    }
}
