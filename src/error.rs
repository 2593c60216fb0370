use crate::food::SpawnError;
use crate::grid::GridError;
use crate::snake;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    GridError(GridError),
    SnakeBuilderError(snake::BuilderError),
    SpawnError(SpawnError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<GridError> for Error {
    fn from(e: GridError) -> Self {
        Self(ErrorType::GridError(e), vec![])
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<SpawnError> for Error {
    fn from(e: SpawnError) -> Self {
        Self(ErrorType::SpawnError(e), vec![])
    }
}

// event handlers have to return ggez errors
impl From<Error> for GameError {
    fn from(e: Error) -> Self {
        let text = e.to_string();
        match e.0 {
            ErrorType::GameError(inner) if e.1.is_empty() => inner,
            _ => GameError::CustomError(text),
        }
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ragged() -> Result<crate::grid::Grid> {
        let table: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        crate::grid::Grid::from_table(&table)
            .map_err(Error::from)
            .with_trace_step("parse_ragged")
    }

    #[test]
    fn test_trace_is_printed_outermost_first() {
        let err = parse_ragged().with_trace_step("load level").err().unwrap();
        assert!(matches!(err.error_type(), ErrorType::GridError(GridError::Ragged { .. })));
        let text = err.to_string();
        let outer = text.find("in load level").unwrap();
        let inner = text.find("in parse_ragged").unwrap();
        assert!(outer < inner, "{}", text);
    }

    #[test]
    fn test_into_game_error() {
        let err = Error::from(SpawnError::BoardFull).with_trace_step("tick");
        match GameError::from(err) {
            GameError::CustomError(msg) => assert!(msg.contains("BoardFull"), "{}", msg),
            other => panic!("unexpected {:?}", other),
        }
    }
}
