//! Provider query construction.

use chrono::NaiveDate;
use morningstar_types::{DateRange, InstrumentId};

/// Default endpoint of the Morningstar data service.
pub const BASE_URL: &str = "https://msxml.tenfore.com/index.php";

/// Date format used by the provider in requests and responses.
pub const WIRE_DATE_FORMAT: &str = "%Y%m%d";

/// A single request to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Currencies an instrument trades in.
    Currencies {
        /// The instrument.
        instrument: InstrumentId,
    },
    /// Instruments listed for an ISIN in a currency.
    Lookup {
        /// Upper-cased ISIN.
        isin: String,
        /// Upper-cased currency code.
        currency: String,
    },
    /// Daily prices of an instrument.
    History {
        /// The instrument.
        instrument: InstrumentId,
        /// Inclusive date range.
        range: DateRange,
    },
    /// Full metadata record of an instrument.
    Meta {
        /// The instrument.
        instrument: InstrumentId,
    },
    /// Daily exchange rates of a currency pair.
    FxHistory {
        /// Base currency.
        base: String,
        /// Counter currency.
        counter: String,
        /// Inclusive date range.
        range: DateRange,
    },
}

impl Query {
    /// Returns the command name, used in logs and as the first parameter.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Currencies { .. } => "currencies",
            Self::Lookup { .. } => "lookup",
            Self::History { .. } | Self::FxHistory { .. } => "timeseries",
            Self::Meta { .. } => "meta",
        }
    }

    /// Returns the subject of the query for log and error messages.
    #[must_use]
    pub fn subject(&self) -> String {
        match self {
            Self::Currencies { instrument }
            | Self::History { instrument, .. }
            | Self::Meta { instrument } => instrument.to_string(),
            Self::Lookup { isin, currency } => format!("{isin}/{currency}"),
            Self::FxHistory { base, counter, .. } => format!("{base}/{counter}"),
        }
    }

    /// Builds the query-string parameters, excluding credentials.
    ///
    /// Flag-style parameters such as the command carry an empty value.
    ///
    /// # Example
    ///
    /// ```
    /// use morningstar_fetch::query::Query;
    ///
    /// let query = Query::Meta { instrument: "182.1.NESN".parse().unwrap() };
    /// assert_eq!(
    ///     query.to_params(),
    ///     vec![("meta", String::new()), ("instrument", "182.1.NESN".to_string())]
    /// );
    /// ```
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![(self.command(), String::new())];
        match self {
            Self::Currencies { instrument } | Self::Meta { instrument } => {
                params.push(("instrument", instrument.to_string()));
            }
            Self::Lookup { isin, currency } => {
                params.push(("isin", isin.clone()));
                params.push(("currency", currency.clone()));
            }
            Self::History { instrument, range } => {
                params.push(("instrument", instrument.to_string()));
                push_range(&mut params, range);
            }
            Self::FxHistory {
                base,
                counter,
                range,
            } => {
                params.push(("fx", format!("{base}{counter}")));
                push_range(&mut params, range);
            }
        }
        params
    }
}

fn push_range(params: &mut Vec<(&'static str, String)>, range: &DateRange) {
    params.push(("fromdate", wire_date(range.start)));
    params.push(("todate", wire_date(range.end)));
}

/// Formats a date the way the provider expects it.
#[must_use]
pub fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}
