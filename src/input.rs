use std::io::{ErrorKind, Read};

const fn ctrl(b: u8) -> u8 {
    b & 0x1f
}

const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');
const NEWLINE: u8 = b'\n';
const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    InsertChar(u8),
    InsertNewline,
    DeleteBackward,
    Move(Direction),
}

/// Decodes the next command from the terminal byte stream.
///
/// `Ok(None)` means the read timed out with no input, or the bytes read were
/// discarded (an unhandled control byte, a lone ESC, an unknown escape
/// sequence). The caller just polls again.
pub fn read_command<R: Read>(input: &mut R) -> std::io::Result<Option<Command>> {
    let Some(c) = next_byte(input)? else {
        return Ok(None);
    };
    if c < 0x20 || c == DEL {
        match c {
            CTRL_Q => Ok(Some(Command::Quit)),
            CTRL_S => Ok(Some(Command::Save)),
            DEL => Ok(Some(Command::DeleteBackward)),
            NEWLINE => Ok(Some(Command::InsertNewline)),
            ESC => read_escape(input),
            _ => Ok(None),
        }
    } else {
        Ok(Some(Command::InsertChar(c)))
    }
}

// Arrow keys arrive as ESC [ A/B/C/D. Both lookahead reads run under the
// same timeout as the main loop; if either yields nothing the sequence is
// abandoned, which makes a bare Escape press a no-op.
fn read_escape<R: Read>(input: &mut R) -> std::io::Result<Option<Command>> {
    let Some(first) = next_byte(input)? else {
        return Ok(None);
    };
    let Some(second) = next_byte(input)? else {
        return Ok(None);
    };
    if first != b'[' {
        return Ok(None);
    }
    Ok(match second {
        b'A' => Some(Command::Move(Direction::Up)),
        b'B' => Some(Command::Move(Direction::Down)),
        b'C' => Some(Command::Move(Direction::Right)),
        b'D' => Some(Command::Move(Direction::Left)),
        _ => None,
    })
}

// A zero-length read is the VTIME timeout expiring with no data.
fn next_byte<R: Read>(input: &mut R) -> std::io::Result<Option<u8>> {
    let mut single = [0u8; 1];
    loop {
        match input.read(&mut single) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(single[0])),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(None),
            Err(err) => return Err(err),
        }
    }
}
