use super::{prelude::*, resolve_coordinates::*};

/// Reads all records, resolves their addresses and writes the result.
///
/// Only an empty or unreadable input and an unwritable output abort
/// the run. Lookups that fail leave empty coordinates behind.
pub fn enrich_table<S, G, W>(
    source: &S,
    gateway: &G,
    sink: &W,
    address_column: &str,
) -> Result<ResolutionStats>
where
    S: RecordSource + ?Sized,
    G: GeoCodingGateway + ?Sized,
    W: RecordSink + ?Sized,
{
    let records = source.read_records()?;
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::info!("{} records read", records.len());
    if !records[0].contains_column(address_column) {
        log::warn!("The input has no column '{address_column}'");
    }
    let (records, stats) = resolve_coordinates(gateway, address_column, records);
    let header = output_header(&records)?;
    sink.write_records(&header, &records)?;
    log::info!(
        "{} of {} addresses resolved ({} without match, {} failed)",
        stats.resolved,
        stats.total(),
        stats.unresolved,
        stats.failed
    );
    Ok(stats)
}
