//! Live market-data source: the Yahoo Finance v8 chart endpoint.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use crate::config::MARKET;
use crate::data::market::{CreateMarketSnapshot, MarketSnapshot};
use crate::domain::DailyBar;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_FETCH_EVENTS;

pub struct YahooApiVersion;

#[async_trait]
impl CreateMarketSnapshot for YahooApiVersion {
    fn signature(&self) -> &'static str {
        "Yahoo Finance API"
    }

    async fn create_snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        let client = reqwest::Client::builder()
            .user_agent(MARKET.endpoint.user_agent)
            .timeout(Duration::from_millis(MARKET.client.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        let url = format!("{}/{}", MARKET.endpoint.base_url, symbol);
        let response = client
            .get(&url)
            .query(&[
                ("range", MARKET.endpoint.chart_range),
                ("interval", MARKET.endpoint.bar_interval),
            ])
            .send()
            .await
            .context(format!("Chart request failed for {}", symbol))?;

        let payload: ChartResponse = response
            .json()
            .await
            .context(format!("Failed to parse chart payload for {}", symbol))?;

        let bars = bars_from_payload(payload)?;

        #[cfg(debug_assertions)]
        if PRINT_FETCH_EVENTS {
            log::info!("Fetched {} daily bars for {} from the chart API", bars.len(), symbol);
        }

        Ok(MarketSnapshot {
            symbol: symbol.to_string(),
            bars,
        })
    }
}

// --- Chart payload structures (only the fields this tool consumes) ---

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Flatten the columnar payload into bars, keeping provider order. Rows with
/// any null OHLC entry (holidays, half-formed sessions) are skipped.
fn bars_from_payload(payload: ChartResponse) -> Result<Vec<DailyBar>> {
    if let Some(error) = payload.chart.error {
        bail!("Chart API error [{}]: {}", error.code, error.description);
    }

    let result = payload
        .chart
        .result
        .and_then(|mut results| if results.is_empty() { None } else { Some(results.remove(0)) })
        .ok_or_else(|| anyhow!("Chart API returned no result"))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Chart API returned no quote block"))?;

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, ts) in result.timestamp.iter().enumerate() {
        let row = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = row else {
            continue;
        };
        let date = DateTime::from_timestamp(*ts, 0)
            .ok_or_else(|| anyhow!("Chart API returned invalid timestamp {}", ts))?
            .date_naive();
        bars.push(DailyBar::new(date, open, high, low, close));
    }

    if bars.is_empty() {
        bail!("Chart API returned no usable daily bars");
    }
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(json: &str) -> ChartResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_well_formed_payload_yields_ordered_bars() {
        // 2026-07-30 and 2026-07-31, midnight UTC
        let payload = parse(
            r#"{"chart":{"result":[{"timestamp":[1785369600,1785456000],
                "indicators":{"quote":[{
                    "open":[18350.0,18420.0],
                    "high":[18500.0,18510.0],
                    "low":[18300.0,18390.0],
                    "close":[18450.0,18480.0]}]}}],
                "error":null}}"#,
        );

        let bars = bars_from_payload(payload).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2026, 7, 30).unwrap());
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2026, 7, 31).unwrap());
        assert_eq!(bars[0].close, 18450.0);
        assert_eq!(bars[1].high, 18510.0);
    }

    #[test]
    fn test_null_rows_are_skipped() {
        let payload = parse(
            r#"{"chart":{"result":[{"timestamp":[1785369600,1785456000],
                "indicators":{"quote":[{
                    "open":[18350.0,null],
                    "high":[18500.0,18510.0],
                    "low":[18300.0,18390.0],
                    "close":[18450.0,18480.0]}]}}],
                "error":null}}"#,
        );

        let bars = bars_from_payload(payload).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].open, 18350.0);
    }

    #[test]
    fn test_api_error_object_surfaces_as_error() {
        let payload = parse(
            r#"{"chart":{"result":null,
                "error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        );

        let err = bars_from_payload(payload).unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_all_null_rows_is_an_error() {
        let payload = parse(
            r#"{"chart":{"result":[{"timestamp":[1785369600],
                "indicators":{"quote":[{"open":[null],"high":[null],"low":[null],"close":[null]}]}}],
                "error":null}}"#,
        );
        assert!(bars_from_payload(payload).is_err());
    }
}
