use anyhow::{anyhow, Result};
use geocsv_application::prelude::TableSettings;
use geocsv_gateways::mapbox;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocsv.toml";

const ENV_NAME_MAPBOX_ACCESS_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";

pub struct Config {
    pub table: TableSettings,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        if let Ok(token) = env::var(ENV_NAME_MAPBOX_ACCESS_TOKEN) {
            set_mapbox_access_token(&mut raw_config, token);
        }
        Self::try_from(raw_config)
    }
}

fn set_mapbox_access_token(cfg: &mut raw::Config, token: String) {
    let gateway = cfg.gateway.get_or_insert_with(Default::default);
    let mapbox = gateway.mapbox.get_or_insert_with(Default::default);
    mapbox.access_token = Some(token);
}

pub fn validate_table(table: &TableSettings) -> Result<()> {
    if table.address_column.trim().is_empty() {
        return Err(anyhow!("No address column defined"));
    }
    Ok(())
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Mapbox {
        access_token: String,
        api_url: String,
        limit: u32,
        timeout: Duration,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            table,
            geocoding,
            gateway,
        } = from;

        let raw::Table {
            input,
            output,
            address_column,
        } = table.unwrap_or_default();

        let table = TableSettings {
            input,
            output,
            address_column,
        };
        validate_table(&table)?;

        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let gateway = gateway.unwrap_or_default();
        let gateway = match gw_name {
            raw::GeocodingGateway::Mapbox => {
                let raw::Mapbox {
                    access_token,
                    api_url,
                    limit,
                    timeout,
                } = gateway
                    .mapbox
                    .ok_or_else(|| anyhow!("Missing 'mapbox' gateway configuration"))?;
                let access_token = access_token
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| {
                        anyhow!(
                            "Missing Mapbox access token (set 'access-token' or {ENV_NAME_MAPBOX_ACCESS_TOKEN})"
                        )
                    })?;
                let limit = limit.unwrap_or(mapbox::DEFAULT_LIMIT);
                if limit == 0 {
                    return Err(anyhow!("The Mapbox result limit must be at least 1"));
                }
                log::info!("Use Mapbox geocoding gateway");
                GeocodingGateway::Mapbox {
                    access_token,
                    api_url: api_url.unwrap_or_else(|| mapbox::DEFAULT_API_URL.to_string()),
                    limit,
                    timeout: timeout.unwrap_or(mapbox::DEFAULT_TIMEOUT),
                }
            }
        };
        let geocoding = Geocoding { gateway };

        Ok(Self { table, geocoding })
    }
}
