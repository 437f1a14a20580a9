// Access traits for tabular sources and sinks.
// A source yields all records of a table in their original order,
// a sink stores them in the column order of the given header.

use crate::entities::*;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("The input '{}' could not be found", path.display())]
    NotFound { path: PathBuf },
    #[error("Malformed input: {0}")]
    Malformed(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Unable to encode output: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub trait RecordSource {
    fn read_records(&self) -> Result<Vec<Record>, ReadError>;
}

pub trait RecordSink {
    fn write_records(&self, header: &Header, records: &[Record]) -> Result<(), WriteError>;
}
