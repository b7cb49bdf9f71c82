//! Interactive read-eval-print loop over stdin/stdout.
//!
//! One command is fully processed (parsed, dispatched, printed) before
//! the next line is read. All data lives in a single in-process
//! [`AddressBook`] and is discarded when the loop ends.

use crate::commands::{dispatch, parse_input, Outcome};
use crate::store::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prompt printed before each command, without a trailing newline.
pub const PROMPT: &str = "Enter a command: ";

/// Banner printed once at startup.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Farewell printed when the user exits.
pub const FAREWELL: &str = "Good bye!";

/// Run the assistant loop on stdin/stdout until `exit`/`close` or EOF.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut book = AddressBook::new();
    run_with(stdin.lock(), stdout.lock(), &mut book)
}

/// Run the assistant loop over arbitrary input/output streams.
///
/// Split out from [`run`] so tests can drive the loop with a scripted
/// transcript. Blank input re-prompts silently; EOF ends the loop
/// without the farewell.
pub fn run_with<R, W>(mut input: R, mut output: W, book: &mut AddressBook) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input stream closed, ending loop");
            break;
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "dispatching");

        match dispatch(&command, &args, book) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Unrecognized => writeln!(output, "Invalid command")?,
            Outcome::Exit => {
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
        }
    }

    Ok(())
}
