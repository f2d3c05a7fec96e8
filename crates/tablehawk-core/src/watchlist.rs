//! Multi-target fan-out.
//!
//! One independent pipeline per watchlist entry, each on its own task with
//! its own deadline gate and retry accounting. Workers share nothing mutable;
//! the transport client, selector, policy, and clock are read-only behind
//! `Arc`s. The coordinator joins every worker before returning: no racing,
//! no short-circuit on failure.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info, info_span, Instrument};

use crate::notify::{BookingOutcome, Notifier};
use crate::request::{Watchlist, WatchlistEntry};
use crate::sniper::Sniper;

pub struct WatchlistCoordinator {
    sniper: Sniper,
    notifier: Arc<dyn Notifier>,
}

impl WatchlistCoordinator {
    pub fn new(sniper: Sniper, notifier: Arc<dyn Notifier>) -> Self {
        Self { sniper, notifier }
    }

    /// Run every entry's pipeline to termination. Outcomes are delivered
    /// through the notifier as each worker finishes; this method itself
    /// returns nothing and never fails early; a worker's error is contained
    /// to that worker.
    pub async fn run(&self, watchlist: Watchlist) {
        let mut workers = JoinSet::new();

        for entry in watchlist.into_entries() {
            let sniper = self.sniper.clone();
            let notifier = Arc::clone(&self.notifier);
            let label = entry.display_label();
            let span = info_span!("watch", venue = %label);
            workers.spawn(run_entry(sniper, notifier, entry).instrument(span));
        }

        info!(count = workers.len(), "watching venues");

        while let Some(joined) = workers.join_next().await {
            // A panicked worker already lost its own notification; the
            // remaining workers keep running regardless.
            if let Err(join_error) = joined {
                error!(error = %join_error, "watch worker crashed");
            }
        }

        info!("all watch workers finished");
    }
}

async fn run_entry(sniper: Sniper, notifier: Arc<dyn Notifier>, entry: WatchlistEntry) {
    let label = entry.display_label();
    info!("worker started, waiting for drop time");

    let outcome = match sniper.snipe_at_drop(&entry.timed).await {
        Ok(confirmation) => {
            info!(token = %confirmation.resy_token, "booking successful");
            BookingOutcome::booked(label.as_str(), &entry.timed.reservation, &confirmation)
        }
        Err(booking_error) => {
            error!(error = %booking_error, "booking failed");
            BookingOutcome::failed(label.as_str(), &entry.timed.reservation, &booking_error)
        }
    };

    notifier.notify(&outcome, entry.timed.notify.as_ref()).await;
}
