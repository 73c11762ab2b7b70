//! Rust client for the Morningstar financial data service.
//!
//! This is a facade crate that re-exports functionality from the
//! morningstar workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use morningstar_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MorningstarClient::new(ClientConfig::new("user", "password"))?;
//!
//!     let currencies = client.get_traded_currencies("182.1.NESN").await?;
//!     println!("NESN trades in {currencies:?}");
//!
//!     let rates = client
//!         .get_fx_prices("USD", "CHF", "01-01-2019", "03-01-2019")
//!         .await?;
//!     for point in &rates {
//!         println!("{} {}", point.date, point.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/morningstar-rs/morningstar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use morningstar_types::*;

// Re-export the client
#[cfg(feature = "fetch")]
pub use morningstar_fetch::{
    ClientConfig, HttpTransport, MorningstarClient, MorningstarError, Transport, TransportError,
    query,
};

/// Prelude module for convenient imports.
///
/// ```
/// use morningstar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use morningstar_types::{
        DateError, DateRange, FormatError, InstrumentId, InstrumentMeta, PricePoint,
        PriceSeries, ProviderError,
    };

    #[cfg(feature = "fetch")]
    pub use morningstar_fetch::{ClientConfig, MorningstarClient, MorningstarError, Result};
}
