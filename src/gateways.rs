use crate::config::{Geocoding, GeocodingGateway};
use anyhow::Result;
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingOutcome};
use geocsv_gateways::mapbox::Mapbox;

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<GeocodingGw> {
    match &cfg.gateway {
        GeocodingGateway::Mapbox {
            access_token,
            api_url,
            limit,
            timeout,
        } => {
            let gw = Mapbox::try_new(api_url, access_token.clone(), *limit, *timeout)?;
            Ok(GeocodingGw::new(gw))
        }
    }
}

pub struct GeocodingGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeocodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeocodingGw {
    fn resolve_address(&self, address: &str) -> GeocodingOutcome {
        self.0.resolve_address(address)
    }
}
