/// Interactive input and output for the menu
///
/// Input comes from a `LineSource`: the rustyline editor when stdin is a
/// terminal (history, line editing), plain buffered lines otherwise so the
/// menu can be driven from a pipe. Output goes to any `Write`.

use crate::core::ShopError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

pub trait LineSource {
    /// Next line without its newline, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShopError>;

    /// Whether `read_line` draws the prompt itself
    fn renders_prompt(&self) -> bool {
        false
    }

    /// Called once when the session ends
    fn finish(&mut self) {}
}

/// rustyline-backed input with a history file
pub struct EditorInput {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl EditorInput {
    pub fn new(history_file: Option<PathBuf>) -> Result<Self, ShopError> {
        let mut editor = DefaultEditor::new()?;
        if let Some(ref path) = history_file {
            let _ = editor.load_history(path); // Ignore error if file doesn't exist
        }
        Ok(Self { editor, history_file })
    }

    /// `~/.mechanic_shop_history`
    #[must_use]
    pub fn default_history_file() -> Option<PathBuf> {
        dirs::home_dir().map(|mut p| {
            p.push(".mechanic_shop_history");
            p
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShopError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl+C and Ctrl+D both end the session
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }

    fn finish(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "could not save history");
            }
        }
    }
}

/// Lines from any buffered reader (piped stdin, files, test fixtures)
pub struct PlainInput<R> {
    reader: R,
}

impl<R: BufRead> PlainInput<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for PlainInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, ShopError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

pub struct Console<W> {
    input: Box<dyn LineSource>,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(input: Box<dyn LineSource>, out: W) -> Self {
        Self { input, out }
    }

    /// Console over in-memory lines, used by scripted sessions
    pub fn scripted<I, S>(lines: I, out: W) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut script = String::new();
        for line in lines {
            script.push_str(line.as_ref());
            script.push('\n');
        }
        Self::new(
            Box::new(PlainInput::new(std::io::Cursor::new(script.into_bytes()))),
            out,
        )
    }

    /// Shows `message` and reads one line; end of input is `InputClosed`
    pub fn prompt(&mut self, message: &str) -> Result<String, ShopError> {
        if !self.input.renders_prompt() {
            self.out.write_all(message.as_bytes())?;
            self.out.flush()?;
        }
        self.input
            .read_line(message)?
            .ok_or(ShopError::InputClosed)
    }

    /// Like `prompt`, repeating with "Your input is invalid!" until an integer is entered
    pub fn prompt_int(&mut self, message: &str) -> Result<i32, ShopError> {
        loop {
            let line = self.prompt(message)?;
            if let Ok(value) = line.trim().parse() {
                return Ok(value);
            }
            writeln!(self.out, "Your input is invalid!")?;
        }
    }

    pub fn finish(&mut self) -> std::io::Result<()> {
        self.input.finish();
        self.out.flush()
    }

    pub const fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_writes_message_and_reads_line() {
        let mut console = Console::scripted(["Smith"], Vec::new());
        let line = console.prompt("Last name: ").unwrap();
        assert_eq!(line, "Smith");
        assert_eq!(String::from_utf8_lossy(console.output()), "Last name: ");
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = Console::scripted(Vec::<String>::new(), Vec::new());
        assert!(matches!(console.prompt("> "), Err(ShopError::InputClosed)));
    }

    #[test]
    fn test_prompt_int_retries() {
        let mut console = Console::scripted(["abc", "", " 7 "], Vec::new());
        assert_eq!(console.prompt_int("n: ").unwrap(), 7);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Your input is invalid!").count(), 2);
    }

    #[test]
    fn test_plain_input_strips_crlf() {
        let mut input = PlainInput::new(std::io::Cursor::new(b"one\r\ntwo".to_vec()));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("one"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("two"));
        assert_eq!(input.read_line("").unwrap(), None);
    }
}
