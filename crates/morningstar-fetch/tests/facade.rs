//! Facade behavior against recorded provider responses.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use morningstar_fetch::query::Query;
use morningstar_fetch::{MorningstarClient, MorningstarError, Transport, TransportError};
use morningstar_types::{
    DateError, DateRange, FormatError, InstrumentId, InstrumentMeta, ProviderError,
};

const EMPTY: &str = include_str!("fixtures/lookup_empty.json");
const NOT_FOUND: &str = include_str!("fixtures/not_found.json");

/// Replays canned bodies keyed by query parameters and records every request.
#[derive(Debug, Default)]
struct FixtureTransport {
    routes: HashMap<String, &'static str>,
    requests: Mutex<Vec<String>>,
}

fn route_key(query: &Query) -> String {
    query
        .to_params()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

impl FixtureTransport {
    fn route(mut self, query: Query, body: &'static str) -> Self {
        self.routes.insert(route_key(&query), body);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn fetch(&self, query: &Query) -> Result<String, TransportError> {
        let key = route_key(query);
        self.requests.lock().unwrap().push(key.clone());
        self.routes
            .get(&key)
            .map(|body| (*body).to_string())
            .ok_or(TransportError::Status { status: 503 })
    }
}

fn id(text: &str) -> InstrumentId {
    text.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

fn history(instrument: &str, start: &str, end: &str) -> Query {
    Query::History {
        instrument: id(instrument),
        range: range(start, end),
    }
}

fn lookup(isin: &str, currency: &str) -> Query {
    Query::Lookup {
        isin: isin.to_string(),
        currency: currency.to_string(),
    }
}

fn provider() -> FixtureTransport {
    FixtureTransport::default()
        .route(
            Query::Currencies {
                instrument: id("182.1.NESN"),
            },
            include_str!("fixtures/currencies_nesn.json"),
        )
        .route(
            Query::Currencies {
                instrument: id("182.1.XXXX"),
            },
            NOT_FOUND,
        )
        .route(
            Query::Meta {
                instrument: id("182.1.NESN"),
            },
            include_str!("fixtures/meta_nesn.json"),
        )
        .route(
            Query::Meta {
                instrument: id("182.1.UBSG"),
            },
            include_str!("fixtures/meta_ubsg.json"),
        )
        .route(
            Query::Meta {
                instrument: id("182.1.XXXX"),
            },
            NOT_FOUND,
        )
        .route(
            history("182.1.NESN", "03-01-2019", "04-01-2019"),
            include_str!("fixtures/prices_nesn.json"),
        )
        .route(
            history("182.1.NESN", "03-01-2019", "03-01-2019"),
            include_str!("fixtures/prices_nesn_single_day.json"),
        )
        .route(
            history("182.1.NESN", "01-01-2019", "01-01-2019"),
            include_str!("fixtures/prices_nesn_holiday.json"),
        )
        .route(
            Query::FxHistory {
                base: "USD".to_string(),
                counter: "CHF".to_string(),
                range: range("01-01-2019", "03-01-2019"),
            },
            include_str!("fixtures/fx_usdchf.json"),
        )
        .route(
            lookup("CH0038863350", "CHF"),
            include_str!("fixtures/lookup_nestle_chf.json"),
        )
        .route(
            history("206.1.NESN", "01-01-2019", "03-01-2019"),
            include_str!("fixtures/prices_206_nesn.json"),
        )
        .route(
            history("215.1.NESR", "01-01-2019", "03-01-2019"),
            include_str!("fixtures/prices_nesr.json"),
        )
        .route(lookup("CH0038863350", "EUR"), EMPTY)
        .route(
            lookup("CH0012221716", "CHF"),
            r#"{"status":{"code":0},"results":[{"instrument":"182.1.ABBN"},{"instrument":"215.1.ABBN"}]}"#,
        )
        .route(
            history("182.1.ABBN", "03-01-2019", "03-01-2019"),
            include_str!("fixtures/prices_nesn_single_day.json"),
        )
        .route(
            history("215.1.ABBN", "03-01-2019", "03-01-2019"),
            include_str!("fixtures/prices_nesn_single_day.json"),
        )
        .route(
            lookup("CH0244767585", "CHF"),
            r#"{"status":{"code":0},"results":[{"instrument":"182.1.UBSG"}]}"#,
        )
        .route(history("182.1.UBSG", "01-01-2019", "01-01-2019"), EMPTY)
}

fn client() -> MorningstarClient<FixtureTransport> {
    MorningstarClient::with_transport(provider())
}

#[tokio::test]
async fn test_get_traded_currencies() {
    let client = client();
    let currencies = client.get_traded_currencies("182.1.NESN").await.unwrap();
    assert_eq!(currencies, vec!["CHF".to_string()]);
    assert_eq!(client.transport().requests().len(), 1);
}

#[tokio::test]
async fn test_get_traded_currencies_unknown_instrument() {
    let result = client().get_traded_currencies(id("182.1.XXXX")).await;
    assert!(matches!(
        result,
        Err(MorningstarError::Provider(ProviderError::UnknownInstrument(ref s))) if s == "182.1.XXXX"
    ));
}

#[tokio::test]
async fn test_get_instrument_meta_matches_identifier() {
    let meta = client().get_instrument_meta("182.1.NESN").await.unwrap();
    assert_eq!(meta.symbol(), Some("NESN"));
    assert_eq!(meta.exchange(), Some("182"));
    assert_eq!(meta.security_type(), Some("1"));
    assert_eq!(meta.isin(), Some("CH0038863350"));
}

#[tokio::test]
async fn test_get_instrument_meta_keeps_provider_labels() {
    let meta = client().get_instrument_meta("182.1.UBSG").await.unwrap();
    let expected = InstrumentMeta::from_fields([
        ("Symbol", "UBSG"),
        ("Exchange", "182"),
        ("Security Type", "1"),
        ("Listed Currency", "CHF"),
        ("Company name", "UBS GROUP N"),
        ("ISIN code", "CH0244767585"),
        ("Country", "CH"),
        ("Local instrument cod", "024476758"),
        ("Exchange code", "XVTX"),
        ("MS Performance ID", "0P0000A5G3"),
        ("Morningstar Industry", "Banks - Diversified"),
        ("Morningstar Group Na", "Banks"),
        ("Morningstar Sector N", "Financial Services"),
        ("MS Investment ID (Se", "E0CHE010PE"),
        ("FIGI country code", "BBG007936GV2"),
        ("Shareclass-level FIG", "BBG007936GX0"),
        ("Global ID investment", "Equity"),
        ("Dividend per share", "0.686497"),
        ("The currency of the ", "USD"),
        ("The Record date of a", "06.05.2020"),
        ("Effective Date - Cor", "05.05.2020"),
        ("EDI Local flag", "UBSG"),
        (
            "MS Medium Business D",
            "UBS is the world's largest wealth manager and is the product of multiple mergers \
             over the years. Apart from wealth and asset management, it operates a universal \
             bank in Switzerland and a global investment bank.",
        ),
        ("Market Cap", "44856902998"),
        ("Dividend Yield", "5.64"),
        ("PE Ratio", "1.5147"),
        ("Debt to equity ratio", "2.915621"),
        ("Price to Book", "0.851571"),
        ("Listing start date (", "20141128"),
        ("Listing end date (st", "99991231"),
        ("EDI Primary Exchange", "CHSSX"),
    ])
    .unwrap();
    assert_eq!(meta.len(), 31);
    assert_eq!(meta, expected);
}

#[tokio::test]
async fn test_get_instrument_meta_unknown_instrument() {
    let result = client().get_instrument_meta("182.1.XXXX").await;
    assert!(matches!(
        result,
        Err(MorningstarError::Provider(ProviderError::UnknownInstrument(_)))
    ));
}

#[tokio::test]
async fn test_get_instrument_prices_keeps_provider_order() {
    let prices = client()
        .get_instrument_prices("182.1.NESN", "03-01-2019", "04-01-2019")
        .await
        .unwrap();
    let keys: Vec<_> = prices.keys().collect();
    assert_eq!(keys, vec![date(2019, 1, 4), date(2019, 1, 3)]);
}

#[tokio::test]
async fn test_get_instrument_prices_single_day() {
    let client = client();
    let trading_day = client
        .get_instrument_prices("182.1.NESN", date(2019, 1, 3), date(2019, 1, 3))
        .await
        .unwrap();
    assert_eq!(trading_day.len(), 1);
    assert!(trading_day.contains(date(2019, 1, 3)));

    let holiday = client
        .get_instrument_prices("182.1.NESN", "01-01-2019", "01-01-2019")
        .await
        .unwrap();
    assert!(holiday.is_empty());
}

#[tokio::test]
async fn test_get_fx_prices() {
    let prices = client()
        .get_fx_prices("USD", "CHF", "01-01-2019", "03-01-2019")
        .await
        .unwrap();
    let keys: Vec<_> = prices.keys().collect();
    assert_eq!(
        keys,
        vec![date(2019, 1, 3), date(2019, 1, 2), date(2019, 1, 1)]
    );
    approx::assert_relative_eq!(prices.get(date(2019, 1, 2)).unwrap(), 0.9877);
}

#[tokio::test]
async fn test_get_fx_prices_normalizes_currency_case() {
    let prices = client()
        .get_fx_prices("usd", "chf", "01-01-2019", "03-01-2019")
        .await
        .unwrap();
    assert_eq!(prices.len(), 3);
}

#[tokio::test]
async fn test_find_instruments_by_isin_and_currency() {
    let found = client()
        .find_instruments_by_isin_and_currency("CH0038863350", "CHF")
        .await
        .unwrap();
    assert!(found.contains(&id("215.1.NESR")));
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_find_instruments_empty_is_not_an_error() {
    let found = client()
        .find_instruments_by_isin_and_currency("CH0038863350", "EUR")
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_get_prices_by_most_available() {
    let client = client();
    let (instrument, prices) = client
        .get_prices_by_most_available("CH0038863350", "CHF", "01-01-2019", "03-01-2019")
        .await
        .unwrap();
    assert_eq!(instrument, id("215.1.NESR"));
    assert_eq!(prices.len(), 2);
    // one lookup, then one history request per candidate
    assert_eq!(client.transport().requests().len(), 3);
}

#[tokio::test]
async fn test_get_prices_by_most_available_tie_keeps_first_listing() {
    let (instrument, _) = client()
        .get_prices_by_most_available("CH0012221716", "CHF", "03-01-2019", "03-01-2019")
        .await
        .unwrap();
    assert_eq!(instrument, id("182.1.ABBN"));
}

#[tokio::test]
async fn test_get_prices_by_most_available_no_match() {
    let result = client()
        .get_prices_by_most_available("CH0038863350", "EUR", "01-01-2019", "03-01-2019")
        .await;
    assert!(matches!(
        result,
        Err(MorningstarError::Provider(ProviderError::NoMatch { .. }))
    ));
}

#[tokio::test]
async fn test_get_prices_by_most_available_errors_carry_normalized_codes() {
    let no_match = client()
        .get_prices_by_most_available("ch0038863350", "eur", "01-01-2019", "03-01-2019")
        .await;
    match no_match {
        Err(MorningstarError::Provider(ProviderError::NoMatch { isin, currency })) => {
            assert_eq!(isin, "CH0038863350");
            assert_eq!(currency, "EUR");
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }

    let no_data = client()
        .get_prices_by_most_available("ch0244767585", "chf", "01-01-2019", "01-01-2019")
        .await;
    match no_data {
        Err(MorningstarError::Provider(ProviderError::NoData { subject })) => {
            assert_eq!(subject, "CH0244767585/CHF");
        }
        other => panic!("expected NoData, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_prices_by_most_available_no_data() {
    let result = client()
        .get_prices_by_most_available("CH0244767585", "CHF", "01-01-2019", "01-01-2019")
        .await;
    assert!(matches!(
        result,
        Err(MorningstarError::Provider(ProviderError::NoData { .. }))
    ));
}

#[tokio::test]
async fn test_caller_errors_send_no_request() {
    let client = client();

    let bad_id = client.get_instrument_meta("182.NESN").await;
    assert!(matches!(
        bad_id,
        Err(MorningstarError::Format(FormatError::TokenCount { tokens: 2, .. }))
    ));

    let bad_date = client
        .get_instrument_prices("182.1.NESN", "2019-01-03", "04-01-2019")
        .await;
    assert!(matches!(
        bad_date,
        Err(MorningstarError::Date(DateError::Parse(_)))
    ));

    let inverted = client
        .get_fx_prices("USD", "CHF", "03-01-2019", "01-01-2019")
        .await;
    assert!(matches!(
        inverted,
        Err(MorningstarError::Date(DateError::InvalidRange { .. }))
    ));

    let bad_isin = client
        .find_instruments_by_isin_and_currency("NESTLE", "CHF")
        .await;
    assert!(matches!(
        bad_isin,
        Err(MorningstarError::Format(FormatError::Isin(_)))
    ));

    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_transport_errors_bubble_up() {
    let result = client().get_instrument_meta("999.1.NONE").await;
    assert!(matches!(
        result,
        Err(MorningstarError::Transport(TransportError::Status { status: 503 }))
    ));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let client = client();
    let first = client
        .get_instrument_prices("182.1.NESN", "03-01-2019", "04-01-2019")
        .await
        .unwrap();
    let second = client
        .get_instrument_prices("182.1.NESN", "03-01-2019", "04-01-2019")
        .await
        .unwrap();
    assert_eq!(first, second);

    let meta_a = client.get_instrument_meta("182.1.UBSG").await.unwrap();
    let meta_b = client.get_instrument_meta("182.1.UBSG").await.unwrap();
    assert_eq!(meta_a, meta_b);
}
