use anyhow::{bail, Result};
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError, GeocodingOutcome};
use geocsv_entities::geo::Coordinate;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
pub const DEFAULT_LIMIT: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Forward geocoding with the Mapbox Geocoding API (v5).
#[derive(Debug, Clone)]
pub struct Mapbox {
    api_url: Url,
    access_token: String,
    limit: u32,
    client: Client,
}

impl Mapbox {
    pub fn try_new(
        api_url: &str,
        access_token: String,
        limit: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let api_url: Url = api_url.parse()?;
        if api_url.cannot_be_a_base() {
            bail!("Invalid Mapbox API URL '{api_url}'");
        }
        if limit == 0 {
            bail!("The result limit must be at least 1");
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url,
            access_token,
            limit,
            client,
        })
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&format!("{address}.json"));
        }
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token)
            .append_pair("limit", &self.limit.to_string());
        url
    }

    fn fetch(&self, address: &str) -> Result<Option<Coordinate>, GeocodingError> {
        let url = self.request_url(address);
        log::debug!("Requesting {}", url.path());
        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status(status.as_u16()));
        }
        let body = response.text().map_err(request_error)?;
        parse_response(&body)
    }
}

fn request_error(err: reqwest::Error) -> GeocodingError {
    if err.is_timeout() {
        GeocodingError::Timeout
    } else {
        GeocodingError::Network(err.without_url().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    // [longitude, latitude]
    center: Option<[f64; 2]>,
}

fn parse_response(body: &str) -> Result<Option<Coordinate>, GeocodingError> {
    let collection: FeatureCollection = serde_json::from_str(body)
        .map_err(|err| GeocodingError::MalformedResponse(err.to_string()))?;
    let Some(feature) = collection.features.unwrap_or_default().into_iter().next() else {
        return Ok(None);
    };
    let center = feature
        .center
        .ok_or_else(|| GeocodingError::MalformedResponse("Feature without center".into()))?;
    Coordinate::try_from_lng_lat(center)
        .map(Some)
        .map_err(|err| GeocodingError::MalformedResponse(err.to_string()))
}

impl GeoCodingGateway for Mapbox {
    fn resolve_address(&self, address: &str) -> GeocodingOutcome {
        if address.trim().is_empty() {
            log::debug!("Skip lookup of blank address");
            return GeocodingOutcome::NoMatch;
        }
        self.fetch(address).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::{Read, Write},
        net::TcpListener,
        sync::mpsc,
        thread,
    };

    fn mapbox(api_url: &str) -> Mapbox {
        Mapbox::try_new(api_url, "secret".into(), DEFAULT_LIMIT, Duration::from_secs(5)).unwrap()
    }

    /// Answers a single HTTP request with `response` and
    /// reports the request line through the returned channel.
    fn serve_once(response: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0; 1024];
            while !request.ends_with(b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request).into_owned();
            let request_line = request.lines().next().unwrap_or_default().to_owned();
            // The receiver may already be gone.
            let _ = tx.send(request_line);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{addr}/geocoding/v5/mapbox.places"), rx)
    }

    #[test]
    fn build_request_url() {
        let gw = mapbox(DEFAULT_API_URL);
        assert_eq!(
            gw.request_url("1600 Pennsylvania Ave").as_str(),
            "https://api.mapbox.com/geocoding/v5/mapbox.places/1600%20Pennsylvania%20Ave.json?access_token=secret&limit=1"
        );
    }

    #[test]
    fn encode_slashes_in_address() {
        let gw = mapbox("https://example.com/places/");
        assert_eq!(
            gw.request_url("Main St 1/2").path(),
            "/places/Main%20St%201%2F2.json"
        );
    }

    #[test]
    fn reject_invalid_settings() {
        assert!(Mapbox::try_new("not a url", "t".into(), 1, DEFAULT_TIMEOUT).is_err());
        assert!(Mapbox::try_new("mailto:a@b.c", "t".into(), 1, DEFAULT_TIMEOUT).is_err());
        assert!(Mapbox::try_new(DEFAULT_API_URL, "t".into(), 0, DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn parse_first_feature_center_as_lng_lat() {
        let body = r#"{
          "type": "FeatureCollection",
          "query": ["1600", "pennsylvania", "ave"],
          "features": [
            { "id": "address.1", "relevance": 1, "center": [-77.03, 38.9] },
            { "id": "address.2", "relevance": 0.5, "center": [10.0, 20.0] }
          ]
        }"#;
        assert_eq!(
            parse_response(body),
            Ok(Some(Coordinate::from_lat_lng(38.9, -77.03)))
        );
    }

    #[test]
    fn parse_empty_or_missing_features_as_no_match() {
        assert_eq!(parse_response(r#"{"features":[]}"#), Ok(None));
        assert_eq!(parse_response(r#"{"features":null}"#), Ok(None));
        assert_eq!(parse_response(r#"{"message":"Not Found"}"#), Ok(None));
    }

    #[test]
    fn reject_malformed_responses() {
        for body in [
            "<html></html>",
            r#"{"features":[{"id":"x"}]}"#,
            r#"{"features":[{"center":[1.0]}]}"#,
            r#"{"features":[{"center":[1.0, 95.0]}]}"#,
        ] {
            assert!(
                matches!(
                    parse_response(body),
                    Err(GeocodingError::MalformedResponse(_))
                ),
                "{body}"
            );
        }
    }

    #[test]
    fn skip_blank_addresses() {
        // Nothing listens on this port: a request would fail.
        let gw = mapbox("http://127.0.0.1:9/places");
        assert_eq!(gw.resolve_address(""), GeocodingOutcome::NoMatch);
        assert_eq!(gw.resolve_address("  "), GeocodingOutcome::NoMatch);
    }

    #[test]
    fn resolve_address_over_http() {
        let (url, request_line) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 39\r\nConnection: close\r\n\r\n{\"features\":[{\"center\":[-77.03,38.9]}]}",
        );
        let outcome = mapbox(&url).resolve_address("1600 Pennsylvania Ave");
        assert_eq!(
            outcome,
            GeocodingOutcome::Match(Coordinate::from_lat_lng(38.9, -77.03))
        );
        assert_eq!(
            request_line.recv().unwrap(),
            "GET /geocoding/v5/mapbox.places/1600%20Pennsylvania%20Ave.json?access_token=secret&limit=1 HTTP/1.1"
        );
    }

    #[test]
    fn report_error_status() {
        let (url, request_line) = serve_once(
            "HTTP/1.1 401 Unauthorized\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        assert_eq!(
            mapbox(&url).resolve_address("somewhere"),
            GeocodingOutcome::Failure(GeocodingError::Status(401))
        );
        assert!(request_line
            .recv()
            .unwrap()
            .starts_with("GET /geocoding/v5/mapbox.places/somewhere.json?"));
    }

    #[test]
    fn report_network_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let outcome = mapbox(&format!("http://{addr}/places")).resolve_address("somewhere");
        assert!(matches!(
            outcome,
            GeocodingOutcome::Failure(GeocodingError::Network(_))
        ));
    }

    #[test]
    fn report_timeouts() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection but never answer.
        let handle = thread::spawn(move || {
            let conn = listener.accept();
            thread::sleep(Duration::from_millis(500));
            drop(conn);
        });
        let gw = Mapbox::try_new(
            &format!("http://{addr}/places"),
            "secret".into(),
            DEFAULT_LIMIT,
            Duration::from_millis(100),
        )
        .unwrap();
        assert_eq!(
            gw.resolve_address("somewhere"),
            GeocodingOutcome::Failure(GeocodingError::Timeout)
        );
        handle.join().unwrap();
    }
}
