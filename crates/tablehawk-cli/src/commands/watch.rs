use std::path::Path;

use tablehawk_core::{Clock, ResyConfig, Watchlist, WatchlistCoordinator};

use crate::error::CliError;

use super::{build_stack, read_json};

/// Watchlist mode: one isolated pipeline per entry; outcomes are delivered
/// through the notifier only, so this command succeeds once every worker has
/// terminated.
pub async fn run(config_path: &Path, watchlist_path: &Path, clock: Clock) -> Result<(), CliError> {
    let config: ResyConfig = read_json(config_path)?;
    let watchlist: Watchlist = read_json(watchlist_path)?;

    let (sniper, notifier) = build_stack(&config, clock);
    WatchlistCoordinator::new(sniper, notifier)
        .run(watchlist)
        .await;

    Ok(())
}
