use crate::traits::{Console, Input, Result};
use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

/// Console over any reader and writer, used when not attached to a terminal and in tests.
/// The end of the input is reported as an interrupt.
#[derive(Debug)]
pub struct LineConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        // Bytes that are not utf-8 end up as replacement characters, making it a non-numeric answer.
        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(Input::Interrupted);
        }
        let line = String::from_utf8_lossy(&line);
        let line = line.trim_end_matches(['\n', '\r']);
        Ok(Input::Line(line.to_owned()))
    }
}

/// Leaves raw mode when dropped, also on the error paths.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Console on the real terminal. Reads keys in raw mode so Ctrl-C arrives as a key instead of
/// killing the process.
#[derive(Debug)]
pub struct TerminalConsole {
    stdout: std::io::Stdout,
    clear_screen: bool,
}

impl TerminalConsole {
    pub fn new(clear_screen: bool) -> Self {
        TerminalConsole {
            stdout: std::io::stdout(),
            clear_screen,
        }
    }

    fn is_interrupt(key: &KeyEvent, buffer: &str) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => true,
            KeyCode::Char('d') => buffer.is_empty(),
            _ => false,
        }
    }

    /// The character a key adds to the answer, control and alt combinations add nothing.
    fn typed_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl Console for TerminalConsole {
    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdout, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        execute!(self.stdout, Print(prompt))?;
        let _raw = RawMode::enable()?;

        let mut buffer = String::new();
        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };
            if Self::is_interrupt(&key, &buffer) {
                return Ok(Input::Interrupted);
            }
            match key.code {
                KeyCode::Enter => {
                    execute!(self.stdout, Print("\r\n"))?;
                    return Ok(Input::Line(buffer));
                }
                KeyCode::Char(_) => {
                    if let Some(c) = Self::typed_char(&key) {
                        buffer.push(c);
                        queue!(self.stdout, Print(c))?;
                    }
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        queue!(self.stdout, Print("\x08 \x08"))?;
                    }
                }
                _ => {}
            }
            self.stdout.flush()?;
        }
    }
}
