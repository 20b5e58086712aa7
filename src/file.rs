use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Reads the whole file into lines. A file that does not exist (or cannot be
/// read) yields a single empty line, so the buffer invariant holds from the
/// start. A trailing newline terminates the last line rather than opening a
/// phantom empty one.
pub fn load_lines(path: &Path) -> Vec<Vec<u8>> {
    let Ok(content) = fs::read(path) else {
        return vec![Vec::new()];
    };
    let mut lines: Vec<Vec<u8>> = content.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
    if content.ends_with(b"\n") {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// Overwrites the file with every line newline-terminated. A destination
/// that cannot be opened is ignored and the session continues.
pub fn save_lines(path: &Path, lines: &[Vec<u8>]) {
    let Ok(mut file) = File::create(path) else {
        return;
    };
    for line in lines {
        if file
            .write_all(line)
            .and_then(|()| file.write_all(b"\n"))
            .is_err()
        {
            return;
        }
    }
}
