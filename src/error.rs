use crate::snake;
use ggez::GameError;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Debug)]
pub enum ErrorKind {
    /// Window, graphics or event loop failure
    Game(GameError),
    /// Invalid initial snake for the chosen layout
    SnakeBuilder(snake::BuilderError),
}

/// An error together with the steps it passed through on the
/// way up, innermost first
#[must_use]
pub struct Error {
    kind: ErrorKind,
    trace: Vec<String>,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, trace: vec![] }
    }
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        ErrorKind::Game(e).into()
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        ErrorKind::SnakeBuilder(e).into()
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.kind)?;
        for step in self.trace.iter().rev() {
            writeln!(f, " in {}", step)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Game(e) => Some(e),
            ErrorKind::SnakeBuilder(e) => Some(e),
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s))
    }
}
