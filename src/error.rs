use std::fmt::Display;

use crate::huffman::Symbol;

#[derive(Debug)]
pub enum Error {
    UnknownSymbol(Symbol),
    UnableToOpenInputFileForReading(String, std::io::Error),
    InputFileIsNotValidText(String),
    NoInputProvided,
    WorkerPoolTerminatedEarly(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => {
                write!(
                    f,
                    "Symbol '{}' not present in code table",
                    symbol.escape_debug()
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::InputFileIsNotValidText(path) => {
                write!(f, "Input file '{}' does not contain valid UTF-8 text", path)
            }
            Self::NoInputProvided => {
                write!(f, "Neither a text nor an input file was provided")
            }
            Self::WorkerPoolTerminatedEarly(missing) => {
                write!(
                    f,
                    "Worker pool terminated before finishing, {} results are missing",
                    missing
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error) => Some(error),
            _ => None,
        }
    }
}
