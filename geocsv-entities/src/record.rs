use crate::geo::Coordinate;

pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    name: String,
    value: Option<String>,
}

/// One row of a table.
///
/// Fields keep the order in which they were added. A column name
/// occurs at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// The value of a column, `None` if the column is missing or null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_deref())
    }

    /// Replaces the value of an existing column or appends a new one.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field { name, value }),
        }
    }

    pub fn set_coordinate(&mut self, pos: Option<Coordinate>) {
        let (lat, lng) = match pos {
            Some(Coordinate { lat, lng }) => (Some(lat.to_string()), Some(lng.to_string())),
            None => (None, None),
        };
        self.set(LATITUDE_COLUMN, lat);
        self.set(LONGITUDE_COLUMN, lng);
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.get(LATITUDE_COLUMN)?.parse().ok()?;
        let lng = self.get(LONGITUDE_COLUMN)?.parse().ok()?;
        Some(Coordinate::from_lat_lng(lat, lng))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.set(k, Some(v.into()));
        }
        record
    }
}
