use crate::table::{ReadError, WriteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The input does not contain any records")]
    EmptyInput,
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
