//! [Elexon BMRS](https://bmrs.elexon.co.uk) settlement system prices client.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::prelude::*;

pub const DEFAULT_BASE_URL: &str =
    "https://data.elexon.co.uk/bmrs/api/v1/balancing/settlement/system-prices/";

/// Source fields every response item must carry.
const EXPECTED_FIELDS: [&str; 6] = [
    "settlementDate",
    "settlementPeriod",
    "startTime",
    "systemSellPrice",
    "systemBuyPrice",
    "netImbalanceVolume",
];

pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    #[instrument(skip_all, fields(on = %on))]
    pub async fn get_system_prices(&self, on: NaiveDate) -> Result<Vec<RawRecord>> {
        let url = self.url_on(on)?;
        info!(%url, "fetching…");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request the system prices from `{url}`"))?;
        let status = response.status();
        ensure!(status.is_success(), "error fetching data, status code {}", status.as_u16());
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))?;
        let records = parse_system_prices(&body)?;
        info!(len = records.len(), "fetched");
        Ok(records)
    }

    fn url_on(&self, on: NaiveDate) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{on}", self.base_url))
            .with_context(|| format!("invalid base URL `{}`", self.base_url))?;
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }
}

/// Raw settlement row with only the columns used for reporting.
///
/// Individual `null`s are kept as missing values, the cleaner drops such rows.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "settlementDate")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "startTime")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(rename = "systemSellPrice")]
    pub price: Option<f64>,

    #[serde(rename = "netImbalanceVolume")]
    pub volume: Option<f64>,
}

/// Validate the response schema and decode the items.
pub fn parse_system_prices(body: &Value) -> Result<Vec<RawRecord>> {
    let Some(data) = body.get("data").and_then(Value::as_array) else {
        bail!("unexpected data format: `data` key not found in the response");
    };
    if let Some(first) = data.first() {
        let missing = EXPECTED_FIELDS.iter().filter(|field| first.get(**field).is_none()).join(", ");
        ensure!(missing.is_empty(), "missing expected columns in the data response: {missing}");
    }
    data.iter()
        .enumerate()
        .map(|(i, item)| {
            RawRecord::deserialize(item).with_context(|| format!("failed to decode item #{i}"))
        })
        .collect()
}
