//! Read/eval/print loop
//!
//! Reads one command per line, hands it to the session and prints the
//! reply. Ends on `exit` or end of input.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use parking_core::{Outcome, Session};

pub const BANNER: &str = "Welcome to the Parking System!";
pub const PROMPT: &str = "> ";

/// Run commands from `input` until `exit` or end of input.
///
/// With `interactive` set, a banner is printed first and a prompt before
/// every read.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(out, "{BANNER}")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            tracing::debug!("end of input");
            break;
        };
        let line = line.context("Failed to read command")?;

        match session.handle_line(&line) {
            Outcome::Reply(text) => writeln!(out, "{text}")?,
            Outcome::Exit => break,
        }
    }

    out.flush()?;
    Ok(())
}
