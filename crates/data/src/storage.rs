//! Data loading and saving utilities.
//!
//! Candles are stored as CSV with the columns
//! `ts,open,high,low,close,volume,datetime_utc`; any CSV carrying a time
//! column (`ts` or `datetime_utc`) plus `close` and `volume` loads as a
//! price series. Yield history is stored as pretty-printed JSON.

use crate::error::{DataError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use csv::{Reader, Writer};
use lp_wealth_domain::entities::{PriceCandle, YieldPoint};
use lp_wealth_domain::series::{PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct CandleRow {
    ts: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    datetime_utc: String,
}

#[derive(Debug, Deserialize)]
struct SeriesRow {
    #[serde(default)]
    ts: Option<i64>,
    #[serde(default)]
    datetime_utc: Option<String>,
    close: f64,
    volume: f64,
}

/// Writes candles as CSV.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_candles_csv<W: Write>(writer: W, candles: &[PriceCandle]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for candle in candles {
        writer.serialize(CandleRow {
            ts: candle.timestamp.timestamp(),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
            datetime_utc: candle.timestamp.to_rfc3339(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves candles to a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_candles_csv<P: AsRef<Path>>(path: P, candles: &[PriceCandle]) -> Result<()> {
    let file = File::create(&path)?;
    write_candles_csv(file, candles)?;
    info!(path = %path.as_ref().display(), rows = candles.len(), "saved candles");
    Ok(())
}

/// Reads a price series from CSV.
///
/// # Errors
/// Returns an error if a row cannot be parsed, has no usable time column,
/// or the resulting series fails validation.
pub fn read_price_series_csv<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut reader = Reader::from_reader(reader);
    let mut bars = Vec::new();

    for (i, row) in reader.deserialize::<SeriesRow>().enumerate() {
        let row = row?;
        // header is line 1
        let line = i + 2;
        let timestamp = row_timestamp(&row).ok_or_else(|| DataError::InvalidRecord {
            line,
            reason: "missing or unparseable ts/datetime_utc".to_string(),
        })?;
        bars.push(PriceBar::new(timestamp, row.close, row.volume));
    }

    Ok(PriceSeries::new(bars)?)
}

/// Loads a price series from a CSV file.
///
/// # Errors
/// See [`read_price_series_csv`].
pub fn load_price_series_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    let file = File::open(&path)?;
    let series = read_price_series_csv(file)?;
    info!(path = %path.as_ref().display(), bars = series.len(), "loaded price series");
    Ok(series)
}

/// Saves yield history as pretty JSON.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_yield_history_json<P: AsRef<Path>>(path: P, history: &[YieldPoint]) -> Result<()> {
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, history)?;
    info!(path = %path.as_ref().display(), points = history.len(), "saved yield history");
    Ok(())
}

fn row_timestamp(row: &SeriesRow) -> Option<DateTime<Utc>> {
    if let Some(ts) = row.ts {
        return DateTime::from_timestamp(ts, 0);
    }
    parse_datetime(row.datetime_utc.as_deref()?)
}

/// Accepts RFC 3339 as well as the `YYYY-MM-DD HH:MM:SS[+00:00]` layout
/// spreadsheet tools tend to write.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
