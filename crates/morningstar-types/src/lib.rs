//! Core types for the Morningstar data client.
//!
//! This crate provides the value types shared by the client crates:
//!
//! - [`InstrumentId`] - Exchange-qualified identifier (`EXCHANGE.TYPE.SYMBOL`)
//! - [`PriceSeries`] - Date-keyed prices in provider order
//! - [`InstrumentMeta`] - Flat provider-defined metadata record
//! - [`DateRange`] - Inclusive date range for price queries
//! - [`FormatError`], [`DateError`], [`ProviderError`] - Error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/morningstar-rs/morningstar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod instrument;
pub mod meta;
mod price;

pub use date_range::{DATE_FORMAT, DateRange, IntoDate, parse_date};
pub use error::{DateError, FormatError, ProviderError};
pub use instrument::{InstrumentId, IntoInstrumentId, parse_currency, parse_isin};
pub use meta::InstrumentMeta;
pub use price::{PricePoint, PriceSeries};
