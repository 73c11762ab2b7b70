//! Provider configuration loading.
//!
//! The configuration file is YAML with the provider settings nested under
//! `provider.morningstar`:
//!
//! ```yaml
//! provider:
//!   morningstar:
//!     url: https://msxml.tenfore.com/index.php
//!     username: user
//!     password: secret
//!     timeout_secs: 30
//! ```
//!
//! `MORNINGSTAR_URL`, `MORNINGSTAR_USERNAME` and `MORNINGSTAR_PASSWORD`
//! override the file values.

use anyhow::{Context, Result, bail};
use morningstar_lib::ClientConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default configuration file name, looked up in the working directory.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "config-morningstar.yml";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    provider: ProviderSection,
}

#[derive(Debug, Deserialize)]
struct ProviderSection {
    morningstar: MorningstarSection,
}

#[derive(Debug, Default, Deserialize)]
struct MorningstarSection {
    url: Option<String>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    timeout_secs: Option<u64>,
}

/// Parses provider settings from YAML text.
fn parse(yaml: &str) -> Result<MorningstarSection> {
    let file: ConfigFile = serde_yaml::from_str(yaml).context("Invalid configuration file")?;
    Ok(file.provider.morningstar)
}

/// Loads the client configuration from `path` and the environment.
///
/// A missing file at the default location is not an error as long as the
/// environment supplies the credentials.
pub(crate) fn load(path: Option<&Path>) -> Result<ClientConfig> {
    let section = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read config file {}", path.display()))?;
            parse(&content)?
        }
        None => match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(content) => parse(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MorningstarSection::default(),
            Err(e) => return Err(e).context("Cannot read config-morningstar.yml"),
        },
    };
    build(section, |key| std::env::var(key).ok())
}

fn build(
    section: MorningstarSection,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();
    if let Some(url) = env("MORNINGSTAR_URL").or(section.url) {
        config.base_url = url;
    }
    config.username = env("MORNINGSTAR_USERNAME").unwrap_or(section.username);
    config.password = env("MORNINGSTAR_PASSWORD").unwrap_or(section.password);
    if let Some(secs) = section.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    if config.username.is_empty() {
        bail!("No Morningstar username configured (set it in the config file or MORNINGSTAR_USERNAME)");
    }
    tracing::debug!(?config, "loaded provider configuration");
    Ok(config)
}
