use geocsv_core::{
    entities::{Header, Record},
    table::{ReadError, RecordSink, RecordSource, WriteError},
};
use std::{
    collections::HashSet,
    fs::File,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

/// Reads comma separated records; the first row names the columns.
///
/// Every row must have as many fields as the header row.
pub fn read_records<R: io::Read>(rdr: R) -> Result<Vec<Record>, ReadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let columns: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(ToOwned::to_owned)
        .collect();
    let mut seen = HashSet::new();
    if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
        return Err(ReadError::Malformed(format!("Duplicate column '{dup}'")));
    }
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(read_error)?;
        let record = columns
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// Writes the header row followed by one row per record.
pub fn write_records<W: io::Write>(
    wtr: W,
    header: &Header,
    records: &[Record],
) -> Result<(), WriteError> {
    let mut wtr = csv::Writer::from_writer(wtr);
    wtr.write_record(header.columns()).map_err(write_error)?;
    for r in records {
        wtr.write_record(header.values(r)).map_err(write_error)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_error(err: csv::Error) -> ReadError {
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(err) => ReadError::Io(err),
        _ => ReadError::Malformed(msg),
    }
}

fn write_error(err: csv::Error) -> WriteError {
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(err) => WriteError::Io(err),
        _ => WriteError::Encode(msg),
    }
}

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self { path }
    }
}

impl RecordSource for CsvFileSource {
    fn read_records(&self) -> Result<Vec<Record>, ReadError> {
        let file = File::open(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ReadError::NotFound {
                path: self.path.clone(),
            },
            _ => err.into(),
        })?;
        read_records(file)
    }
}

#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self { path }
    }
}

impl RecordSink for CsvFileSink {
    fn write_records(&self, header: &Header, records: &[Record]) -> Result<(), WriteError> {
        let file = File::create(&self.path)?;
        write_records(file, header, records)
    }
}
