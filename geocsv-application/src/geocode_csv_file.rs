use super::prelude::*;
use crate::csv_file::{CsvFileSink, CsvFileSource};
use geocsv_core::{
    gateways::geocode::GeoCodingGateway,
    usecases::{self, ResolutionStats},
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TableSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Name of the column that holds the address.
    pub address_column: String,
}

pub fn geocode_csv_file<G>(gateway: &G, settings: &TableSettings) -> Result<ResolutionStats>
where
    G: GeoCodingGateway + ?Sized,
{
    let TableSettings {
        input,
        output,
        address_column,
    } = settings;
    info!("Reading CSV file {}", input.display());
    let source = CsvFileSource::new(input);
    let sink = CsvFileSink::new(output);
    let stats = usecases::enrich_table(&source, gateway, &sink, address_column)?;
    info!("Output CSV written to {}", output.display());
    Ok(stats)
}
