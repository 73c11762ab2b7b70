//! Instrument identifiers and caller-supplied security codes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::FormatError;

const SEPARATOR: char = '.';

/// Exchange-qualified instrument identifier, e.g. `182.1.NESN`.
///
/// The canonical text form is `EXCHANGE.SECURITY_TYPE.SYMBOL`. Tokens are
/// compared exactly as provided, so `182.1.nesn` and `182.1.NESN` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstrumentId {
    exchange: String,
    security_type: String,
    symbol: String,
}

impl InstrumentId {
    /// Creates an identifier from its three tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is empty or contains `.`, since such an
    /// identifier could not be parsed back from its text form.
    pub fn new(
        exchange: impl Into<String>,
        security_type: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let id = Self {
            exchange: exchange.into(),
            security_type: security_type.into(),
            symbol: symbol.into(),
        };
        for token in [&id.exchange, &id.security_type, &id.symbol] {
            if token.is_empty() {
                return Err(FormatError::EmptyToken(id.to_string()));
            }
            if token.contains(SEPARATOR) {
                return Err(FormatError::SeparatorInToken(token.clone()));
            }
        }
        Ok(id)
    }

    /// Parses the canonical `EXCHANGE.SECURITY_TYPE.SYMBOL` form.
    ///
    /// # Errors
    ///
    /// Returns an error unless the text splits into exactly three non-empty
    /// tokens.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = text.split(SEPARATOR).collect();
        let [exchange, security_type, symbol] = tokens.as_slice() else {
            return Err(FormatError::TokenCount {
                input: text.to_string(),
                tokens: tokens.len(),
            });
        };
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(FormatError::EmptyToken(text.to_string()));
        }
        Ok(Self {
            exchange: (*exchange).to_string(),
            security_type: (*security_type).to_string(),
            symbol: (*symbol).to_string(),
        })
    }

    /// Returns the exchange code.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Returns the security-type code.
    #[must_use]
    pub fn security_type(&self) -> &str {
        &self.security_type
    }

    /// Returns the symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.exchange, self.security_type, self.symbol
        )
    }
}

impl FromStr for InstrumentId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InstrumentId {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<InstrumentId> for String {
    fn from(id: InstrumentId) -> Self {
        id.to_string()
    }
}

/// Conversion into an [`InstrumentId`], accepting either a parsed identifier
/// or its text form.
pub trait IntoInstrumentId {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the text form is malformed.
    fn into_instrument_id(self) -> Result<InstrumentId, FormatError>;
}

impl IntoInstrumentId for InstrumentId {
    fn into_instrument_id(self) -> Result<InstrumentId, FormatError> {
        Ok(self)
    }
}

impl IntoInstrumentId for &InstrumentId {
    fn into_instrument_id(self) -> Result<InstrumentId, FormatError> {
        Ok(self.clone())
    }
}

impl IntoInstrumentId for &str {
    fn into_instrument_id(self) -> Result<InstrumentId, FormatError> {
        InstrumentId::parse(self)
    }
}

impl IntoInstrumentId for String {
    fn into_instrument_id(self) -> Result<InstrumentId, FormatError> {
        InstrumentId::parse(&self)
    }
}

/// Validates and upper-cases an ISIN.
///
/// Only the shape is checked (12 ASCII alphanumerics); the check digit is
/// left to the provider.
///
/// # Errors
///
/// Returns an error if the input is not 12 alphanumeric characters.
pub fn parse_isin(isin: &str) -> Result<String, FormatError> {
    let trimmed = isin.trim();
    if trimmed.len() != 12 || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FormatError::Isin(isin.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validates and upper-cases a 3-letter currency code.
///
/// # Errors
///
/// Returns an error if the input is not exactly three ASCII letters.
pub fn parse_currency(currency: &str) -> Result<String, FormatError> {
    let trimmed = currency.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatError::Currency(currency.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}
