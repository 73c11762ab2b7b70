//! Typed query facade over a provider transport.

use std::collections::HashSet;

use morningstar_types::{
    DateRange, InstrumentId, InstrumentMeta, IntoDate, IntoInstrumentId, PriceSeries,
    ProviderError, parse_currency, parse_isin,
};
use tracing::debug;

use crate::error::Result;
use crate::parse::{parse_currencies, parse_lookup, parse_meta, parse_series};
use crate::query::Query;
use crate::{ClientConfig, HttpTransport, Transport};

/// Client for the Morningstar data service.
///
/// Each operation turns its arguments into one or more provider queries,
/// awaits them one at a time and maps the responses into normalized values.
/// The client holds no state besides its transport, so repeated calls with
/// the same arguments see the same provider data.
#[derive(Debug, Clone)]
pub struct MorningstarClient<T = HttpTransport> {
    transport: T,
}

impl MorningstarClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> MorningstarClient<T> {
    /// Creates a client over an existing transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the currencies an instrument trades in, in provider order.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is malformed or the provider does not know
    /// the instrument.
    pub async fn get_traded_currencies(
        &self,
        instrument: impl IntoInstrumentId,
    ) -> Result<Vec<String>> {
        let query = Query::Currencies {
            instrument: instrument.into_instrument_id()?,
        };
        let body = self.transport.fetch(&query).await?;
        Ok(parse_currencies(&body, &query)?)
    }

    /// Resolves an ISIN and currency to the listing with the most prices in
    /// the range and returns it together with those prices.
    ///
    /// Candidates are fetched one after the other. The candidate with the
    /// most price points wins; on a tie the one the provider listed first is
    /// kept.
    ///
    /// # Errors
    ///
    /// Fails with [`ProviderError::NoMatch`] if no instrument is listed for
    /// the pair and [`ProviderError::NoData`] if none of them has prices in
    /// the range.
    pub async fn get_prices_by_most_available(
        &self,
        isin: &str,
        currency: &str,
        start_date: impl IntoDate,
        end_date: impl IntoDate,
    ) -> Result<(InstrumentId, PriceSeries)> {
        let isin = parse_isin(isin)?;
        let currency = parse_currency(currency)?;
        let range = DateRange::parse(start_date, end_date)?;
        let candidates = self.lookup(isin.clone(), currency.clone()).await?;
        if candidates.is_empty() {
            return Err(ProviderError::NoMatch { isin, currency }.into());
        }

        let mut best: Option<(InstrumentId, PriceSeries)> = None;
        for candidate in candidates {
            let series = self.fetch_series(&candidate, range).await?;
            debug!(instrument = %candidate, prices = series.len(), "candidate listing");
            if best.as_ref().is_none_or(|(_, kept)| series.len() > kept.len()) {
                best = Some((candidate, series));
            }
        }

        match best {
            Some((instrument, series)) if !series.is_empty() => Ok((instrument, series)),
            _ => Err(ProviderError::NoData {
                subject: format!("{isin}/{currency}"),
            }
            .into()),
        }
    }

    /// Returns every instrument listed for an ISIN in a currency.
    ///
    /// An empty set means no listing matched.
    ///
    /// # Errors
    ///
    /// Fails if the ISIN or currency is malformed or the provider rejects
    /// the query.
    pub async fn find_instruments_by_isin_and_currency(
        &self,
        isin: &str,
        currency: &str,
    ) -> Result<HashSet<InstrumentId>> {
        Ok(self
            .find_instrument_list(isin, currency)
            .await?
            .into_iter()
            .collect())
    }

    /// Like [`find_instruments_by_isin_and_currency`](Self::find_instruments_by_isin_and_currency),
    /// but keeps the provider's listing order.
    ///
    /// # Errors
    ///
    /// Fails if the ISIN or currency is malformed or the provider rejects
    /// the query.
    pub async fn find_instrument_list(
        &self,
        isin: &str,
        currency: &str,
    ) -> Result<Vec<InstrumentId>> {
        self.lookup(parse_isin(isin)?, parse_currency(currency)?).await
    }

    /// Returns the daily prices of an instrument over an inclusive range,
    /// in provider order.
    ///
    /// A single-day range yields zero or one prices.
    ///
    /// # Errors
    ///
    /// Fails on a malformed identifier or date, an inverted range, or a
    /// provider rejection.
    pub async fn get_instrument_prices(
        &self,
        instrument: impl IntoInstrumentId,
        start_date: impl IntoDate,
        end_date: impl IntoDate,
    ) -> Result<PriceSeries> {
        let instrument = instrument.into_instrument_id()?;
        let range = DateRange::parse(start_date, end_date)?;
        self.fetch_series(&instrument, range).await
    }

    /// Returns the full metadata record of an instrument.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is malformed or the provider does not know
    /// the instrument.
    pub async fn get_instrument_meta(
        &self,
        instrument: impl IntoInstrumentId,
    ) -> Result<InstrumentMeta> {
        let query = Query::Meta {
            instrument: instrument.into_instrument_id()?,
        };
        let body = self.transport.fetch(&query).await?;
        Ok(parse_meta(&body, &query)?)
    }

    /// Returns daily exchange rates of `base` in `counter` over an inclusive
    /// range, in provider order.
    ///
    /// # Errors
    ///
    /// Fails on a malformed currency or date, an inverted range, or a
    /// provider rejection.
    pub async fn get_fx_prices(
        &self,
        base_currency: &str,
        counter_currency: &str,
        start_date: impl IntoDate,
        end_date: impl IntoDate,
    ) -> Result<PriceSeries> {
        let query = Query::FxHistory {
            base: parse_currency(base_currency)?,
            counter: parse_currency(counter_currency)?,
            range: DateRange::parse(start_date, end_date)?,
        };
        let body = self.transport.fetch(&query).await?;
        Ok(parse_series(&body, &query)?)
    }

    async fn lookup(&self, isin: String, currency: String) -> Result<Vec<InstrumentId>> {
        let query = Query::Lookup { isin, currency };
        let body = self.transport.fetch(&query).await?;
        Ok(parse_lookup(&body, &query)?)
    }

    async fn fetch_series(&self, instrument: &InstrumentId, range: DateRange) -> Result<PriceSeries> {
        let query = Query::History {
            instrument: instrument.clone(),
            range,
        };
        let body = self.transport.fetch(&query).await?;
        Ok(parse_series(&body, &query)?)
    }
}
