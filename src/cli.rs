use crate::{
    config::{self, Config},
    gateways,
};
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use geocsv_application::prelude::geocode_csv_file;
use std::path::PathBuf;

/// Add latitude and longitude columns to a CSV file
/// by geocoding one of its address columns.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (default: geocsv.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file to read
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// CSV file to write
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Name of the column that holds the address
    #[arg(short, long, value_name = "NAME")]
    address_column: Option<String>,
}

pub fn run() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    apply_overrides(&mut cfg, args)?;

    let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
    geocode_csv_file(&gateway, &cfg.table)?;
    Ok(())
}

fn apply_overrides(cfg: &mut Config, args: Args) -> Result<()> {
    let Args {
        input,
        output,
        address_column,
        ..
    } = args;
    if let Some(input) = input {
        cfg.table.input = input;
    }
    if let Some(output) = output {
        cfg.table.output = output;
    }
    if let Some(column) = address_column {
        cfg.table.address_column = column;
    }
    config::validate_table(&cfg.table)
}
