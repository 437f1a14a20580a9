use geocsv_core::{
    table::{ReadError, WriteError},
    usecases,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] usecases::Error),
}

impl From<ReadError> for AppError {
    fn from(err: ReadError) -> Self {
        usecases::Error::from(err).into()
    }
}

impl From<WriteError> for AppError {
    fn from(err: WriteError) -> Self {
        usecases::Error::from(err).into()
    }
}
