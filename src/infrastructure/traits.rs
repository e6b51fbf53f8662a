//! I/O boundary traits for testability
//!
//! These traits abstract console interaction, allowing the input loop and the
//! whole session to be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

/// Line-oriented console abstraction.
pub trait Console {
    /// Read one line without its trailing newline.
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text as-is and flush, so prompts appear before input is read.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Console over any reader/writer pair.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and hand back the writer (captured output in tests).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console attached to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn given_crlf_input_when_reading_then_strips_line_ending() {
        let mut console = LineConsole::new(Cursor::new("42\r\nnext\n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("42".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("next".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn given_written_text_when_into_writer_then_returns_output() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.write("Enter: ").unwrap();
        console.write_line("done").unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Enter: done\n");
    }
}
