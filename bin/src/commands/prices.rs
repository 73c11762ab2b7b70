//! Price command implementations.
//!
//! Covers both direct instrument price queries and ISIN-based queries that
//! let the client pick the listing with the most data.

use crate::display::{Format, print_series};
use anyhow::{Context, Result};
use morningstar_lib::prelude::*;

/// Show daily prices of an instrument.
pub(crate) async fn show_prices(
    client: &MorningstarClient,
    instrument: &str,
    start: &str,
    end: &str,
    format: Format,
) -> Result<()> {
    let prices = client
        .get_instrument_prices(instrument, start, end)
        .await
        .with_context(|| format!("Cannot fetch prices for {instrument}"))?;
    print_series(&prices, format)
}

/// Show daily prices of the best-covered listing for an ISIN and currency.
pub(crate) async fn show_most_available(
    client: &MorningstarClient,
    isin: &str,
    currency: &str,
    start: &str,
    end: &str,
    format: Format,
) -> Result<()> {
    let (instrument, prices) = client
        .get_prices_by_most_available(isin, currency, start, end)
        .await
        .with_context(|| format!("Cannot fetch prices for {isin} in {currency}"))?;

    if format == Format::Json {
        let output = serde_json::json!({ "instrument": instrument, "prices": prices });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Instrument: {instrument}\n");
    print_series(&prices, format)
}
