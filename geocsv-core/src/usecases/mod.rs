mod enrich_table;
mod error;
mod resolve_coordinates;


pub use self::{enrich_table::*, error::Error, resolve_coordinates::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, table::*};
}
