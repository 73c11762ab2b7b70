//! Display utilities and output formatting for the morningstar CLI.

use anyhow::Result;
use clap::ValueEnum;
use morningstar_lib::prelude::*;
use serde::Serialize;

/// Output format for query results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// Returns the format name.
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a price series, one date per line in provider order.
pub(crate) fn print_series(series: &PriceSeries, format: Format) -> Result<()> {
    if format == Format::Json {
        return print_json(series);
    }

    if series.is_empty() {
        println!("No prices found.");
        return Ok(());
    }

    println!("{:<12} {:>14}", "DATE", "PRICE");
    println!("{}", "-".repeat(27));
    for point in series {
        println!("{:<12} {:>14}", point.date.to_string(), point.price);
    }
    println!("\nTotal: {} prices", series.len());
    Ok(())
}

/// Print a metadata record as label/value pairs.
pub(crate) fn print_meta(meta: &InstrumentMeta, format: Format) -> Result<()> {
    if format == Format::Json {
        return print_json(meta);
    }

    let width = meta.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in meta.iter() {
        println!("{label:<width$}  {value}");
    }
    Ok(())
}

/// Print a list of plain values, one per line.
pub(crate) fn print_list<T: Serialize + std::fmt::Display>(items: &[T], format: Format) -> Result<()> {
    if format == Format::Json {
        return print_json(items);
    }

    if items.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for item in items {
        println!("{item}");
    }
    Ok(())
}
