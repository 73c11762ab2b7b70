//! CLI command implementations.

pub(crate) mod currencies;
pub(crate) mod find;
pub(crate) mod fx;
pub(crate) mod meta;
pub(crate) mod prices;
