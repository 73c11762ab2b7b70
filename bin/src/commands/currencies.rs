//! Currencies command implementation.

use crate::display::{Format, print_list};
use anyhow::{Context, Result};
use morningstar_lib::prelude::*;

/// Show the currencies an instrument trades in.
pub(crate) async fn show_currencies(
    client: &MorningstarClient,
    instrument: &str,
    format: Format,
) -> Result<()> {
    let currencies = client
        .get_traded_currencies(instrument)
        .await
        .with_context(|| format!("Cannot fetch currencies for {instrument}"))?;
    print_list(&currencies, format)
}
