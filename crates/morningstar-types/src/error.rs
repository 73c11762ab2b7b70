//! Error types for Morningstar data queries.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed caller-supplied identifier, ISIN or currency code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Instrument identifier does not have exactly three `.`-separated tokens.
    #[error("Invalid instrument '{input}': expected EXCHANGE.TYPE.SYMBOL, found {tokens} token(s)")]
    TokenCount {
        /// The rejected input.
        input: String,
        /// Number of tokens found.
        tokens: usize,
    },

    /// Instrument identifier has an empty token.
    #[error("Invalid instrument '{0}': empty token")]
    EmptyToken(String),

    /// A single identifier token contains the `.` separator.
    #[error("Invalid instrument token '{0}': must not contain '.'")]
    SeparatorInToken(String),

    /// ISIN is not 12 alphanumeric characters.
    #[error("Invalid ISIN '{0}': expected 12 alphanumeric characters")]
    Isin(String),

    /// Currency is not a 3-letter code.
    #[error("Invalid currency '{0}': expected a 3-letter code")]
    Currency(String),
}

/// Error for caller-supplied dates and date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Date text is not in `DD-MM-YYYY` form.
    #[error("Invalid date '{0}': expected DD-MM-YYYY")]
    Parse(String),

    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// The provider rejected a query or answered with something unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No instrument matches the ISIN and currency pair.
    #[error("No instrument found for ISIN {isin} in {currency}")]
    NoMatch {
        /// The queried ISIN.
        isin: String,
        /// The queried currency.
        currency: String,
    },

    /// The query matched but returned no prices in the requested range.
    #[error("No data available for {subject} in requested range")]
    NoData {
        /// What was queried (instrument or currency pair).
        subject: String,
    },

    /// The provider does not know the instrument.
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// The provider reported a non-zero status code.
    #[error("Provider status {code}: {message}")]
    Status {
        /// Provider status code.
        code: i64,
        /// Provider status message.
        message: String,
    },

    /// The response body could not be mapped to the expected shape.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}
