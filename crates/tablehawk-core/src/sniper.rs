//! Drop-time booking engine.
//!
//! One [`Sniper`] drives the whole acquisition for a single request: wait
//! out the deadline gate, then race through the precomputed
//! date × party-size plan until a slot is committed or the retry budget is
//! gone.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::{
    BookOrder, BookingApi, BookingError, BookingErrorKind, ConfirmationToken, DetailsQuery,
    FindQuery,
};
use crate::clock::Clock;
use crate::deadline::DeadlineGate;
use crate::plan::AttemptPlan;
use crate::request::{ReservationRequest, TimedReservationRequest};
use crate::retry::RetryPolicy;
use crate::selector::Selector;

/// Outcome of one full traversal of the attempt plan.
enum PassOutcome {
    Booked(ConfirmationToken),
    /// The upstream aborted the pass; restart without spending budget.
    UpstreamStalled(BookingError),
    /// Every combination was tried and none had availability.
    Exhausted,
}

/// Booking engine for one target. Cheap to clone per watchlist worker; all
/// shared state is read-only behind `Arc`s.
#[derive(Clone)]
pub struct Sniper {
    api: Arc<dyn BookingApi>,
    selector: Arc<dyn Selector>,
    policy: RetryPolicy,
    clock: Clock,
}

impl Sniper {
    pub fn new(
        api: Arc<dyn BookingApi>,
        selector: Arc<dyn Selector>,
        policy: RetryPolicy,
        clock: Clock,
    ) -> Self {
        Self {
            api,
            selector,
            policy,
            clock,
        }
    }

    pub const fn clock(&self) -> Clock {
        self.clock
    }

    /// Single-shot acquisition for one exact (day, party size) request:
    /// find → select → details → book. No retries at this level.
    pub async fn book_once(
        &self,
        request: &ReservationRequest,
    ) -> Result<ConfirmationToken, BookingError> {
        let day = request.target_day(self.clock.today())?;
        let party_size = request.party_size;

        let slots = self
            .api
            .find_slots(FindQuery {
                venue_id: request.venue_id,
                party_size,
                day,
            })
            .await?;

        if slots.is_empty() {
            return Err(BookingError::no_slots(format!(
                "no slots for party of {party_size} on {day}"
            )));
        }

        let slot = self
            .selector
            .select(&slots, request)
            .ok_or_else(|| BookingError::no_slots("selector rejected every offered slot"))?;
        debug!(
            slot_type = %slot.slot_type,
            start = %slot.start,
            offered = slots.len(),
            "selected slot"
        );

        let token = self
            .api
            .booking_details(DetailsQuery {
                config_token: slot.config_token,
                party_size,
                day,
            })
            .await?;

        self.api
            .book(BookOrder {
                book_token: token.value,
            })
            .await
    }

    /// One date-major traversal of the plan. NoSlots advances within the
    /// pass; Unavailable abandons it; anything else is terminal.
    async fn run_pass(
        &self,
        request: &ReservationRequest,
        plan: &AttemptPlan,
    ) -> Result<PassOutcome, BookingError> {
        for (day, party_size) in plan.combinations() {
            let variant = request.with_overrides(day, party_size);
            match self.book_once(&variant).await {
                Ok(confirmation) => return Ok(PassOutcome::Booked(confirmation)),
                Err(error) => match error.kind() {
                    BookingErrorKind::NoSlots => {
                        info!(%day, %party_size, "no slots, trying next option");
                    }
                    BookingErrorKind::Unavailable => {
                        warn!(
                            venue = %request.venue_id,
                            error = %error,
                            "upstream unavailable, abandoning pass"
                        );
                        return Ok(PassOutcome::UpstreamStalled(error));
                    }
                    _ => return Err(error),
                },
            }
        }
        Ok(PassOutcome::Exhausted)
    }

    /// Retry orchestration around [`Self::book_once`].
    ///
    /// Budget accounting: only a pass that runs to completion without a
    /// booking consumes one of `max_passes`. Upstream-aborted passes are
    /// free and restart after their own backoff, bounded only by the
    /// consecutive-stall cap.
    pub async fn book_with_retries(
        &self,
        request: &ReservationRequest,
    ) -> Result<ConfirmationToken, BookingError> {
        let plan = AttemptPlan::build(request, self.clock.today())?;
        debug!(
            days = plan.days().len(),
            sizes = plan.sizes().len(),
            "attempt plan built"
        );

        let mut attempts: u32 = 0;
        let mut stalls: u32 = 0;
        loop {
            match self.run_pass(request, &plan).await? {
                PassOutcome::Booked(confirmation) => {
                    info!(venue = %request.venue_id, token = %confirmation.resy_token, "slot booked");
                    return Ok(confirmation);
                }
                PassOutcome::UpstreamStalled(error) => {
                    stalls += 1;
                    if stalls >= self.policy.max_upstream_stalls {
                        warn!(stalls, "upstream still failing, giving up");
                        return Err(error);
                    }
                    tokio::time::sleep(self.policy.upstream_backoff).await;
                }
                PassOutcome::Exhausted => {
                    stalls = 0;
                    attempts += 1;
                    if attempts >= self.policy.max_passes {
                        return Err(BookingError::retries_exhausted(format!(
                            "retried {attempts} times without finding a slot"
                        )));
                    }
                    info!(
                        attempts,
                        max_passes = self.policy.max_passes,
                        "pass found nothing, backing off"
                    );
                    tokio::time::sleep(self.policy.delay_between_passes).await;
                }
            }
        }
    }

    /// Full single-target pipeline: wait for the drop instant, then book
    /// with retries.
    pub async fn snipe_at_drop(
        &self,
        timed: &TimedReservationRequest,
    ) -> Result<ConfirmationToken, BookingError> {
        let gate = DeadlineGate::new(timed.drop_time, self.clock);
        gate.await_deadline().await;
        self.book_with_retries(&timed.reservation).await
    }
}
