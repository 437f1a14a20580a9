pub mod entities {
    pub use geocsv_entities::{geo::*, header::*, record::*};
}

pub mod gateways;
pub mod table;
pub mod usecases;
