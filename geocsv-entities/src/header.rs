use crate::record::{Record, LATITUDE_COLUMN, LONGITUDE_COLUMN};

/// Ordered list of output column names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    pub fn from_record(record: &Record) -> Self {
        Self(record.column_names().map(ToOwned::to_owned).collect())
    }

    /// Appends the coordinate columns unless they are already present.
    pub fn with_coordinate_columns(mut self) -> Self {
        for name in [LATITUDE_COLUMN, LONGITUDE_COLUMN] {
            if !self.0.iter().any(|c| c == name) {
                self.0.push(name.to_owned());
            }
        }
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    /// The values of `record` in header order; missing and null fields are empty.
    pub fn values<'a>(&'a self, record: &'a Record) -> impl Iterator<Item = &'a str> {
        self.0.iter().map(|c| record.get(c).unwrap_or_default())
    }
}
