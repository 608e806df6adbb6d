/// A single question, `a OP b`. The operation is held by whoever asks it.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct Fact {
    pub a: u8,
    pub b: u8,
}

impl Fact {
    pub fn new(a: u8, b: u8) -> Self {
        Fact { a, b }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DrillError {
    /// Reading from or writing to the console failed.
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;

/// What the console handed back after a prompt.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Input {
    /// A line of text, without the line terminator.
    Line(String),
    /// Ctrl-C, or the input stream ended.
    Interrupted,
}

/// Where questions are printed and answers are read from.
pub trait Console {
    /// Clear the screen, if this console supports and wants that.
    fn clear(&mut self) -> Result<()>;

    /// Write a complete line.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Show the prompt and block until the user entered a line.
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// The entity that decides what question to ask next.
pub trait Selector: std::fmt::Debug {
    /// Retrieve a question to ask, None if there is nothing to ask at all.
    fn get_question(&mut self) -> Option<Fact>;
}
