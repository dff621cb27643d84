use crate::models::RawTollRecord;
use anyhow::{Context, Result};
use reqwest::Client;
use std::env;
use tracing::info;

/// SODA resource endpoint for the national toll collection dataset.
const DEFAULT_DATA_URL: &str = "https://www.datos.gov.co/resource/8yi9-t44c.json";

/// Single-request record cap. Rows past this are silently not fetched; the
/// fetched count is logged so a truncated pull is at least visible.
pub const RECORD_LIMIT: usize = 200_000;

pub fn resolve_data_url() -> String {
    env::var("TOLL_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string())
}

/// One bulk pull of raw records. Any failure here is fatal to startup.
pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<RawTollRecord>> {
    let records: Vec<RawTollRecord> = client
        .get(url)
        .query(&[("$limit", RECORD_LIMIT.to_string())])
        .send()
        .await
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("error status from {url}"))?
        .json()
        .await
        .with_context(|| format!("decoding records from {url}"))?;

    info!("fetched {} raw records", records.len());
    Ok(records)
}
