mod search;
mod snipe;
mod watch;

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tablehawk_core::{
    Clock, ClosestTimeSelector, HttpClient, Notifier, ReqwestHttpClient, ResyClient, ResyConfig,
    RetryPolicy, Sniper, WebhookNotifier,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli, clock: Clock) -> Result<(), CliError> {
    match &cli.command {
        Command::Snipe {
            config,
            reservation,
        } => snipe::run(config, reservation, clock).await,
        Command::Watch { config, watchlist } => watch::run(config, watchlist, clock).await,
        Command::Search { config, query } => search::run(config, query).await,
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseFile {
        path: path.display().to_string(),
        source,
    })
}

/// Shared wiring: one reqwest transport behind both the booking client and
/// the webhook notifier.
pub(crate) fn build_stack(config: &ResyConfig, clock: Clock) -> (Sniper, Arc<dyn Notifier>) {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let api = Arc::new(ResyClient::from_config(Arc::clone(&http), config));
    let sniper = Sniper::new(
        api,
        Arc::new(ClosestTimeSelector),
        RetryPolicy::default(),
        clock,
    );
    let notifier: Arc<dyn Notifier> = Arc::new(WebhookNotifier::new(http));
    (sniper, notifier)
}
