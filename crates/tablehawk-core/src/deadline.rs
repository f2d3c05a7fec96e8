use std::time::Duration;

use time::{OffsetDateTime, Time};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::request::DropTime;

/// Head start before the advertised drop instant, absorbing clock and
/// network skew so the first find lands at or just before the true release.
pub const EARLY_START: Duration = Duration::from_secs(2);

const HEARTBEAT_PERIOD: Duration = Duration::from_secs(10);

/// Blocks one worker until its venue's drop instant.
///
/// The wait is a single timer suspension, not a clock-polling loop; a coarse
/// heartbeat tick logs liveness on the side without touching the wake-up
/// precision.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineGate {
    target: OffsetDateTime,
    clock: Clock,
}

impl DeadlineGate {
    /// Target = today (per `clock`) at the drop time, minus [`EARLY_START`].
    pub fn new(drop_time: DropTime, clock: Clock) -> Self {
        let release = Time::from_hms(drop_time.hour(), drop_time.minute(), 0)
            .expect("drop time components are validated");
        let target = clock.now().replace_time(release) - EARLY_START;
        Self { target, clock }
    }

    /// Gate on an explicit instant instead of a drop time today.
    pub const fn at(target: OffsetDateTime, clock: Clock) -> Self {
        Self { target, clock }
    }

    pub const fn target(&self) -> OffsetDateTime {
        self.target
    }

    pub fn remaining(&self) -> time::Duration {
        self.target - self.clock.now()
    }

    /// Suspend until the target instant. Returns immediately if it has
    /// already passed (late start). Never fails; cancellation is the
    /// caller's task being dropped.
    pub async fn await_deadline(&self) {
        let remaining = self.remaining();
        if !remaining.is_positive() {
            debug!(target = %self.target, "drop time already passed, booking immediately");
            return;
        }

        info!(
            target = %self.target,
            remaining_s = remaining.whole_seconds(),
            "waiting for drop time"
        );

        let sleep = tokio::time::sleep(remaining.unsigned_abs());
        tokio::pin!(sleep);
        let mut heartbeat = tokio::time::interval(HEARTBEAT_PERIOD);
        // The first tick completes immediately; consume it so the heartbeat
        // starts one period from now.
        heartbeat.tick().await;

        loop {
            tokio::select! {
                () = &mut sleep => {
                    info!(target = %self.target, "drop time reached");
                    return;
                }
                _ = heartbeat.tick() => {
                    debug!(
                        remaining_s = self.remaining().whole_seconds(),
                        "still waiting for drop time"
                    );
                }
            }
        }
    }
}
