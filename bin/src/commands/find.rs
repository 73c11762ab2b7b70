//! Find command implementation.

use crate::display::{Format, print_list};
use anyhow::{Context, Result};
use morningstar_lib::prelude::*;

/// List the instruments the provider associates with an ISIN and currency.
pub(crate) async fn find_instruments(
    client: &MorningstarClient,
    isin: &str,
    currency: &str,
    format: Format,
) -> Result<()> {
    let instruments = client
        .find_instrument_list(isin, currency)
        .await
        .with_context(|| format!("Cannot look up {isin} in {currency}"))?;
    print_list(&instruments, format)
}
