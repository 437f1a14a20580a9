use crate::entities::Coordinate;
use thiserror::Error;

/// Why a single lookup did not produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("The request timed out")]
    Timeout,
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodingOutcome {
    /// The most relevant candidate reported by the service.
    Match(Coordinate),
    NoMatch,
    Failure(GeocodingError),
}

impl From<Result<Option<Coordinate>, GeocodingError>> for GeocodingOutcome {
    fn from(res: Result<Option<Coordinate>, GeocodingError>) -> Self {
        match res {
            Ok(Some(pos)) => Self::Match(pos),
            Ok(None) => Self::NoMatch,
            Err(err) => Self::Failure(err),
        }
    }
}

/// Resolves a free-text address into a position.
///
/// Implementations must return within a bounded time and never panic;
/// every error condition is reported as [`GeocodingOutcome::Failure`].
pub trait GeoCodingGateway {
    fn resolve_address(&self, address: &str) -> GeocodingOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_result() {
        let pos = Coordinate::from_lat_lng(1.0, 2.0);
        assert_eq!(GeocodingOutcome::from(Ok(Some(pos))), GeocodingOutcome::Match(pos));
        assert_eq!(GeocodingOutcome::from(Ok(None)), GeocodingOutcome::NoMatch);
        assert_eq!(
            GeocodingOutcome::from(Err(GeocodingError::Status(401))),
            GeocodingOutcome::Failure(GeocodingError::Status(401))
        );
    }
}
