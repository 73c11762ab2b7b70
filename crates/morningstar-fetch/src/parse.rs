//! Mapping of provider response bodies to normalized values.
//!
//! Every body is a JSON envelope:
//!
//! ```text
//! {"status": {"code": 0, "message": "OK"}, "results": [ ... ]}
//! ```
//!
//! A non-zero status code is a provider-side rejection; `404` means the
//! queried instrument is unknown.

use chrono::NaiveDate;
use morningstar_types::{InstrumentId, InstrumentMeta, PricePoint, PriceSeries, ProviderError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::query::{Query, WIRE_DATE_FORMAT};

/// Status code the provider uses for unknown instruments.
const STATUS_NOT_FOUND: i64 = 404;

#[derive(Debug, Deserialize)]
struct Envelope {
    status: Status,
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Status {
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct CurrencyRow {
    currency: String,
}

#[derive(Debug, Deserialize)]
struct LookupRow {
    instrument: String,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: String,
    price: WirePrice,
}

/// Prices arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct MetaRow {
    label: String,
    value: String,
}

/// Parses a currencies response into codes in provider order.
///
/// # Errors
///
/// Returns an error if the provider rejected the query, the body is
/// malformed, or no currency was listed.
pub fn parse_currencies(body: &str, query: &Query) -> Result<Vec<String>, ProviderError> {
    let rows: Vec<CurrencyRow> = parse_rows(body, query)?;
    if rows.is_empty() {
        return Err(ProviderError::UnknownInstrument(query.subject()));
    }
    Ok(rows.into_iter().map(|row| row.currency).collect())
}

/// Parses a lookup response into instruments in provider order.
///
/// Repeated instruments are dropped; an empty list is not an error.
///
/// # Errors
///
/// Returns an error if the provider rejected the query or an instrument is
/// not in `EXCHANGE.TYPE.SYMBOL` form.
pub fn parse_lookup(body: &str, query: &Query) -> Result<Vec<InstrumentId>, ProviderError> {
    let rows: Vec<LookupRow> = parse_rows(body, query)?;
    let mut instruments: Vec<InstrumentId> = Vec::with_capacity(rows.len());
    for row in rows {
        let id = InstrumentId::parse(&row.instrument)
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;
        if !instruments.contains(&id) {
            instruments.push(id);
        }
    }
    Ok(instruments)
}

/// Parses a time series response, keeping the provider's row order.
///
/// # Errors
///
/// Returns an error if the provider rejected the query, a date or price is
/// unreadable, or a date repeats.
pub fn parse_series(body: &str, query: &Query) -> Result<PriceSeries, ProviderError> {
    let rows: Vec<PriceRow> = parse_rows(body, query)?;
    let points = rows
        .into_iter()
        .map(|row| {
            let date = NaiveDate::parse_from_str(&row.date, WIRE_DATE_FORMAT)
                .map_err(|_| ProviderError::Malformed(format!("invalid date '{}'", row.date)))?;
            Ok(PricePoint::new(date, row.price.to_f64()?))
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    PriceSeries::from_points(points)
}

/// Parses a metadata response into a flat record.
///
/// # Errors
///
/// Returns an error if the provider rejected the query, the body is
/// malformed, or the record is empty.
pub fn parse_meta(body: &str, query: &Query) -> Result<InstrumentMeta, ProviderError> {
    let rows: Vec<MetaRow> = parse_rows(body, query)?;
    if rows.is_empty() {
        return Err(ProviderError::UnknownInstrument(query.subject()));
    }
    InstrumentMeta::from_fields(rows.into_iter().map(|row| (row.label, row.value)))
}

impl WirePrice {
    fn to_f64(&self) -> Result<f64, ProviderError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ProviderError::Malformed(format!("invalid price '{s}'")))?,
        };
        if !value.is_finite() {
            return Err(ProviderError::Malformed(format!("non-finite price {value}")));
        }
        Ok(value)
    }
}

/// Checks the envelope status and decodes every result row.
fn parse_rows<T: DeserializeOwned>(body: &str, query: &Query) -> Result<Vec<T>, ProviderError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    match envelope.status.code {
        0 => {}
        STATUS_NOT_FOUND => {
            warn!(command = query.command(), subject = %query.subject(), "provider: not found");
            return Err(ProviderError::UnknownInstrument(query.subject()));
        }
        code => {
            warn!(
                command = query.command(),
                code,
                message = %envelope.status.message,
                "provider rejected query"
            );
            return Err(ProviderError::Status {
                code,
                message: envelope.status.message,
            });
        }
    }

    envelope
        .results
        .into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| ProviderError::Malformed(e.to_string())))
        .collect()
}
