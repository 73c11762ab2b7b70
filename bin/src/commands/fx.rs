//! FX command implementation.

use crate::display::{Format, print_series};
use anyhow::{Context, Result};
use morningstar_lib::prelude::*;

/// Show daily exchange rates of a currency pair.
pub(crate) async fn show_fx(
    client: &MorningstarClient,
    base: &str,
    counter: &str,
    start: &str,
    end: &str,
    format: Format,
) -> Result<()> {
    let rates = client
        .get_fx_prices(base, counter, start, end)
        .await
        .with_context(|| format!("Cannot fetch {base}/{counter} rates"))?;
    print_series(&rates, format)
}
