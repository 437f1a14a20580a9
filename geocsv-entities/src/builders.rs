pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::record_builder::*;

pub mod record_builder {

    use super::*;
    use crate::{geo::*, record::*};

    #[derive(Debug)]
    pub struct RecordBuild {
        record: Record,
    }

    impl RecordBuild {
        pub fn field(mut self, name: &str, value: &str) -> Self {
            self.record.set(name, Some(value.into()));
            self
        }
        pub fn null(mut self, name: &str) -> Self {
            self.record.set(name, None);
            self
        }
        pub fn coordinate(mut self, lat: f64, lng: f64) -> Self {
            self.record
                .set_coordinate(Some(Coordinate::from_lat_lng(lat, lng)));
            self
        }
        pub fn finish(self) -> Record {
            self.record
        }
    }

    impl Builder for Record {
        type Build = RecordBuild;
        fn build() -> RecordBuild {
            RecordBuild {
                record: Record::default(),
            }
        }
    }
}
