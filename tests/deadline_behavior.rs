//! Behavior-driven tests for the deadline gate as the single-target
//! pipeline sees it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tablehawk_core::{DeadlineGate, EARLY_START};
use tablehawk_tests::{
    fast_policy, request, slot_on, sniper_over, Clock, Day, DropTime, ScriptedApi, ScriptedStep,
    TimedReservationRequest,
};

#[test]
fn gate_target_sits_early_start_before_the_drop_instant() {
    // Given: a 17:00 drop
    let clock = Clock::utc();
    let gate = DeadlineGate::new(DropTime::new(17, 0).expect("valid"), clock);

    // Then: the target is today 17:00:00 minus the head start
    let target = gate.target();
    assert_eq!(target.date(), clock.now().date());
    let drop_instant = target + time::Duration::try_from(EARLY_START).expect("small duration");
    assert_eq!(
        (drop_instant.hour(), drop_instant.minute(), drop_instant.second()),
        (17, 0, 0)
    );
}

#[tokio::test]
async fn an_elapsed_deadline_is_a_no_op_wait() {
    let clock = Clock::utc();
    let gate = DeadlineGate::at(clock.now() - time::Duration::hours(1), clock);

    let started = Instant::now();
    gate.await_deadline().await;
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn a_near_deadline_wakes_on_time_without_spinning() {
    let clock = Clock::utc();
    let gate = DeadlineGate::at(clock.now() + time::Duration::milliseconds(80), clock);

    gate.await_deadline().await;
    // Woke at or after the target, not before.
    assert!(!gate.remaining().is_positive());
}

#[tokio::test]
async fn late_process_start_books_immediately_through_the_full_pipeline() {
    // Given: the drop minute is already behind us when the process starts
    let clock = Clock::utc();
    let now = clock.now();
    let day = Day::parse("2026-08-08").expect("valid");
    let api =
        Arc::new(ScriptedApi::new().script(3, vec![ScriptedStep::Offer(vec![slot_on(day)])]));
    let sniper = sniper_over(Arc::clone(&api), fast_policy(2));

    let timed = TimedReservationRequest {
        reservation: request(3, "2026-08-08"),
        drop_time: DropTime::new(now.hour(), now.minute()).expect("valid clock reading"),
        notify: None,
    };

    // When
    let started = Instant::now();
    let confirmation = sniper.snipe_at_drop(&timed).await.expect("books");

    // Then: no gate wait happened before the booking
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(confirmation.resy_token, "tok-1");
}
