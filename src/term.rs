use std::io::{self, stdin, Read, Stdin};
use std::os::fd::AsRawFd;

use libc::{ioctl, winsize, TIOCGWINSZ};
use raw_tty::{GuardMode, TtyWithGuard};
use termios::{
    tcsetattr, Termios, ECHO, ICANON, ICRNL, ISIG, IXON, OPOST, TCSAFLUSH, VMIN, VTIME,
};

/// Keystroke-at-a-time access to the controlling terminal.
///
/// The guard captures the original attributes when created and restores them
/// when dropped, so every exit path leaves the terminal in cooked mode.
pub struct RawTerm {
    tty: TtyWithGuard<Stdin>,
}

impl RawTerm {
    /// Switches stdin to raw mode: no echo, no line buffering, no signal
    /// keys, no CR translation or flow control on input, no output
    /// post-processing. Reads return whatever is available, waiting at most
    /// a tenth of a second when nothing is.
    pub fn enable() -> io::Result<Self> {
        let tty = stdin().guard_mode()?;
        let mut raw = Termios::from_fd(libc::STDIN_FILENO)?;
        raw.c_lflag &= !(ECHO | ICANON | ISIG);
        raw.c_iflag &= !(IXON | ICRNL);
        raw.c_oflag &= !OPOST;
        raw.c_cc[VMIN] = 0;
        raw.c_cc[VTIME] = 1;
        tcsetattr(libc::STDIN_FILENO, TCSAFLUSH, &raw)?;
        Ok(Self { tty })
    }
}

impl Read for RawTerm {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.tty.read(buf)
    }
}

/// Asks the terminal for its size. `None` when the ioctl fails or reports a
/// zero-width window; the caller substitutes a fallback.
pub fn viewport() -> Option<(u16, u16)> {
    let mut ws = winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let rc = unsafe { ioctl(io::stdout().as_raw_fd(), TIOCGWINSZ, &mut ws) };
    if rc == -1 || ws.ws_col == 0 {
        None
    } else {
        Some((ws.ws_row, ws.ws_col))
    }
}
