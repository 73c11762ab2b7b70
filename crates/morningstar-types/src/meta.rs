//! Flat instrument metadata records.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ProviderError;

/// Label of the symbol field.
pub const SYMBOL: &str = "Symbol";
/// Label of the exchange field.
pub const EXCHANGE: &str = "Exchange";
/// Label of the security-type field.
pub const SECURITY_TYPE: &str = "Security Type";
/// Label of the ISIN field.
pub const ISIN: &str = "ISIN code";
/// Label of the listing currency field.
pub const LISTED_CURRENCY: &str = "Listed Currency";

/// Provider-defined metadata for one instrument.
///
/// Labels are kept verbatim, including the provider's truncated ones such as
/// `"Local instrument cod"`, and every value stays a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstrumentMeta {
    fields: BTreeMap<String, String>,
}

impl InstrumentMeta {
    /// Builds a record from label/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Malformed`] on an empty or repeated label.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Result<Self, ProviderError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (label, value) in fields {
            let label = label.into();
            if label.is_empty() {
                return Err(ProviderError::Malformed("empty metadata label".to_string()));
            }
            if map.contains_key(&label) {
                return Err(ProviderError::Malformed(format!(
                    "repeated metadata label '{label}'"
                )));
            }
            map.insert(label, value.into());
        }
        Ok(Self { fields: map })
    }

    /// Returns the value for a label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Returns the `Symbol` field.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.get(SYMBOL)
    }

    /// Returns the `Exchange` field.
    #[must_use]
    pub fn exchange(&self) -> Option<&str> {
        self.get(EXCHANGE)
    }

    /// Returns the `Security Type` field.
    #[must_use]
    pub fn security_type(&self) -> Option<&str> {
        self.get(SECURITY_TYPE)
    }

    /// Returns the `ISIN code` field.
    #[must_use]
    pub fn isin(&self) -> Option<&str> {
        self.get(ISIN)
    }

    /// Returns the `Listed Currency` field.
    #[must_use]
    pub fn listed_currency(&self) -> Option<&str> {
        self.get(LISTED_CURRENCY)
    }

    /// Iterates over label/value pairs, ordered by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the record, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }
}
