use std::{path::PathBuf, process};

use clap::{Arg, Command};
use editor::Editor;

pub mod buffer;
pub mod editor;
pub mod file;
pub mod input;
pub mod render;
pub mod term;

fn main() -> anyhow::Result<()> {
    let path = parse_args();
    let editor = Editor::open(path)?;
    editor.run()?;
    println!("[exited scrawl]");
    Ok(())
}

// Fatal terminal errors propagate out of main after the raw-mode guard has
// already restored the terminal; exit status is 1 and the diagnostic lands
// on a usable shell.
fn parse_args() -> PathBuf {
    let parsed = Command::new("scrawl")
        .about("a tiny raw-mode terminal text editor")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .help("file to edit (created on save if missing)"),
        )
        .try_get_matches();
    let mut matches = match parsed {
        Ok(matches) => matches,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            process::exit(0);
        }
        Err(_) => {
            println!("Usage: scrawl <FILE>");
            process::exit(1);
        }
    };
    match matches.remove_one::<String>("file") {
        Some(file) => PathBuf::from(file),
        None => {
            println!("Usage: scrawl <FILE>");
            process::exit(1);
        }
    }
}
