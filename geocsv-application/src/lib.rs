#[macro_use]
extern crate log;

pub mod csv_file;
pub mod error;
mod geocode_csv_file;


pub mod prelude {
    pub use super::{error::AppError, geocode_csv_file::*};
    pub type Result<T> = std::result::Result<T, AppError>;
}

pub use geocsv_core::{entities, gateways, table, usecases};
