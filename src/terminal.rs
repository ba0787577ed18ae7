//! Terminal queries and buffered output.

use crossterm::terminal;
use std::io::{self, IsTerminal, Stdout};

/// Current terminal width in columns.
///
/// Unlike a display loop, a one-shot listing cannot guess a width: failing to
/// read it is an error the caller reports.
pub fn terminal_width() -> io::Result<u16> {
    let (width, _) = terminal::size()?;
    if width == 0 {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "terminal reported zero columns",
        ));
    }
    Ok(width)
}

/// Whether standard output is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
