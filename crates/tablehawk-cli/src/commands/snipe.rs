use std::path::Path;

use tracing::info;

use tablehawk_core::{BookingOutcome, Clock, ResyConfig, TimedReservationRequest};

use crate::error::CliError;

use super::{build_stack, read_json};

/// Single-target mode: gate and retry loop run on the caller's task; the
/// outcome is notified and, on failure, re-raised into the process exit code.
pub async fn run(
    config_path: &Path,
    reservation_path: &Path,
    clock: Clock,
) -> Result<(), CliError> {
    let config: ResyConfig = read_json(config_path)?;
    let timed: TimedReservationRequest = read_json(reservation_path)?;

    let (sniper, notifier) = build_stack(&config, clock);
    info!(venue = %timed.reservation.venue_id, "sniping one reservation");

    match sniper.snipe_at_drop(&timed).await {
        Ok(confirmation) => {
            let label = format!("venue {}", timed.reservation.venue_id);
            let outcome = BookingOutcome::booked(label, &timed.reservation, &confirmation);
            notifier.notify(&outcome, timed.notify.as_ref()).await;
            println!("{}", confirmation.resy_token);
            Ok(())
        }
        Err(booking_error) => {
            let label = format!("venue {}", timed.reservation.venue_id);
            let outcome = BookingOutcome::failed(label, &timed.reservation, &booking_error);
            notifier.notify(&outcome, timed.notify.as_ref()).await;
            Err(booking_error.into())
        }
    }
}
