//! HTTP transport and query facade for the Morningstar data client.
//!
//! This crate provides the request/response pipeline:
//!
//! - [`query::Query`] - Typed provider queries and their URL parameters
//! - [`Transport`] / [`HttpTransport`] - Raw provider round trips
//! - [`parse`] - Response envelope mapping to normalized values
//! - [`MorningstarClient`] - The six-operation query facade

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/morningstar-rs/morningstar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod facade;
pub mod parse;
pub mod query;

pub use client::{ClientConfig, HttpTransport, Transport, TransportError};
pub use error::{MorningstarError, Result};
pub use facade::MorningstarClient;
