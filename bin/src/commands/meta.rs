//! Meta command implementation.
//!
//! Prints the provider's metadata record for one instrument with the labels
//! exactly as the provider supplies them.

use crate::display::{Format, print_meta};
use anyhow::{Context, Result};
use morningstar_lib::prelude::*;

/// Show the metadata record of an instrument.
pub(crate) async fn show_meta(
    client: &MorningstarClient,
    instrument: &str,
    format: Format,
) -> Result<()> {
    let meta = client
        .get_instrument_meta(instrument)
        .await
        .with_context(|| format!("Cannot fetch metadata for {instrument}"))?;
    print_meta(&meta, format)
}
