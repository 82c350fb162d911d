// src/services/jgb.rs
use log::debug;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::AppConfig;

use super::error::{FetchError, FetchResult};

/// JP 10Y yield adapter. The source is a static quote page whose first
/// table carries the latest yield in the second column of its first data
/// row.
pub struct JgbClient {
    client: Client,
    url: String,
}

impl JgbClient {
    pub fn new(cfg: &AppConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(cfg.http_timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
            .build()?;
        Ok(Self {
            client,
            url: cfg.jgb_url.clone(),
        })
    }

    pub async fn latest_yield(&self) -> FetchResult<f64> {
        debug!("Fetching JP 10Y page: {}", self.url);
        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await?;
        parse_yield_table(&body)
    }
}

/// Pull the yield out of the first table: first row with at least two
/// cells, second cell.
fn parse_yield_table(html: &str) -> FetchResult<f64> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();
    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| FetchError::Parse("no table in page".to_string()))?;

    for row in table.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() < 2 {
            continue;
        }
        let text = cells[1].text().collect::<String>();
        return parse_cell_numeric(&text);
    }

    Err(FetchError::Parse("no data row in table".to_string()))
}

/// Extract the first numeric token from a table cell, tolerating
/// surrounding units or markup text.
fn parse_cell_numeric(text: &str) -> FetchResult<f64> {
    let re = Regex::new(r"[-+]?\d+(?:\.\d+)?")
        .map_err(|e| FetchError::Parse(e.to_string()))?;
    let m = re
        .find(text)
        .ok_or_else(|| FetchError::Parse(format!("no numeric value in cell: {text:?}")))?;
    m.as_str()
        .parse::<f64>()
        .map_err(|e| FetchError::Parse(e.to_string()))
}
