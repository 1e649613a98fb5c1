mod fetch;
mod report;

use std::time::Duration;

use tracing::info;
use wattbox_core::{AccessToken, CacheMode, FetchConfig, HouseId, PriceHistory, TibberClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Environment variable holding the Tibber API token.
pub const TOKEN_ENV: &str = "TIBBER_TOKEN";
/// Environment variable holding the house id.
pub const HOUSE_ID_ENV: &str = "HOUSE_ID";

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Report(args) => report::run(cli, args).await,
        Command::Fetch(args) => fetch::run(cli, args).await,
    }
}

/// Read and validate credentials once, at the call boundary. The core
/// never touches the process environment.
fn credentials() -> Result<(AccessToken, HouseId), CliError> {
    let token = std::env::var(TOKEN_ENV).map_err(|_| CliError::MissingEnv(TOKEN_ENV))?;
    let house = std::env::var(HOUSE_ID_ENV).map_err(|_| CliError::MissingEnv(HOUSE_ID_ENV))?;

    Ok((AccessToken::parse(&token)?, HouseId::parse(&house)?))
}

fn fetch_config(cli: &Cli) -> FetchConfig {
    let cache_mode = if cli.no_cache {
        CacheMode::Bypass
    } else if cli.refresh {
        CacheMode::Refresh
    } else {
        CacheMode::Use
    };

    FetchConfig::default()
        .with_lookback_weeks(cli.weeks)
        .with_timeout(Duration::from_millis(cli.timeout_ms))
        .with_cache_ttl(Duration::from_secs(cli.cache_ttl_minutes * 60))
        .with_cache_mode(cache_mode)
        .with_cache_dir(cli.cache_dir.clone())
}

pub(crate) async fn fetch_history(cli: &Cli) -> Result<PriceHistory, CliError> {
    let (token, house) = credentials()?;
    let client = TibberClient::new(fetch_config(cli))?;

    let history = client.price_history(&token, &house).await?;
    info!(points = history.len(), weeks = cli.weeks, "fetched price history");

    Ok(history)
}
