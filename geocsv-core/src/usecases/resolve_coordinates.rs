use super::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionStats {
    pub resolved: usize,
    /// The service did not find a matching location.
    pub unresolved: usize,
    /// The lookup itself failed.
    pub failed: usize,
}

impl ResolutionStats {
    pub fn total(&self) -> usize {
        self.resolved + self.unresolved + self.failed
    }
}

/// Attaches a position to every record.
///
/// The gateway is called once per record, strictly one after the other
/// and in input order. Records without a result get empty coordinates.
pub fn resolve_coordinates<G>(
    gateway: &G,
    address_column: &str,
    records: Vec<Record>,
) -> (Vec<Record>, ResolutionStats)
where
    G: GeoCodingGateway + ?Sized,
{
    let mut stats = ResolutionStats::default();
    let mut results = Vec::with_capacity(records.len());
    for (idx, mut record) in records.into_iter().enumerate() {
        let row = idx + 1;
        let address = record.get(address_column).unwrap_or_default();
        let pos = match gateway.resolve_address(address) {
            GeocodingOutcome::Match(pos) => {
                log::debug!("Resolved address '{address}' (row {row}): {pos}");
                stats.resolved += 1;
                Some(pos)
            }
            GeocodingOutcome::NoMatch => {
                log::warn!("No location found for address '{address}' (row {row})");
                stats.unresolved += 1;
                None
            }
            GeocodingOutcome::Failure(err) => {
                log::warn!("Error geocoding address '{address}' (row {row}): {err}");
                stats.failed += 1;
                None
            }
        };
        record.set_coordinate(pos);
        results.push(record);
    }
    (results, stats)
}

/// The output columns: the columns of the first record
/// followed by the coordinate columns.
pub fn output_header(records: &[Record]) -> Result<Header> {
    let first = records.first().ok_or(Error::EmptyInput)?;
    Ok(Header::from_record(first).with_coordinate_columns())
}
