//! Behavior-driven tests for the retry orchestration.
//!
//! These verify the budget accounting the drop race depends on: fruitless
//! passes are bounded, upstream outages are free, and the search space is
//! traversed date-major.

use std::sync::Arc;

use tablehawk_core::BookingErrorKind;
use tablehawk_tests::{
    fast_policy, request, slot_on, sniper_over, AttemptRecord, Day, PartySize, ScriptedApi,
    ScriptedStep,
};

// =============================================================================
// Retry budget: fruitless passes
// =============================================================================

#[tokio::test]
async fn when_every_combination_is_empty_budget_is_spent_in_exactly_max_passes() {
    // Given: one combination that never has availability and a budget of 5
    let api = Arc::new(ScriptedApi::new());
    let sniper = sniper_over(Arc::clone(&api), fast_policy(5));

    // When: the engine books with retries
    let result = sniper.book_with_retries(&request(1, "2026-08-08")).await;

    // Then: it fails with RetriesExhausted after exactly 5 passes
    let error = result.expect_err("no slot can be found");
    assert_eq!(error.kind(), BookingErrorKind::RetriesExhausted);
    assert_eq!(api.find_calls(), 5, "one find per pass, five passes");
}

#[tokio::test]
async fn when_a_later_pass_finds_a_slot_the_engine_books_it() {
    // Given: no availability on the first two passes, a slot on the third
    let day = Day::parse("2026-08-08").expect("valid");
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![
            ScriptedStep::NoSlots,
            ScriptedStep::NoSlots,
            ScriptedStep::Offer(vec![slot_on(day)]),
        ],
    ));
    let sniper = sniper_over(Arc::clone(&api), fast_policy(5));

    // When
    let confirmation = sniper
        .book_with_retries(&request(1, "2026-08-08"))
        .await
        .expect("third pass succeeds");

    // Then
    assert_eq!(confirmation.resy_token, "tok-1");
    assert_eq!(api.find_calls(), 3);
    assert_eq!(api.bookings(), 1);
}

// =============================================================================
// Retry budget: upstream outages are free
// =============================================================================

#[tokio::test]
async fn when_upstream_fails_the_pass_restarts_without_spending_budget() {
    // Given: two upstream failures, then a pass where the primary size is
    // empty but the fallback size books, with a budget of only 2 passes
    let day = Day::parse("2026-08-08").expect("valid");
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![
            ScriptedStep::Unavailable,
            ScriptedStep::Unavailable,
            ScriptedStep::NoSlots,
            ScriptedStep::Offer(vec![slot_on(day)]),
        ],
    ));
    let mut req = request(1, "2026-08-08");
    req.fallback_party_sizes = vec![PartySize::new(2).expect("valid")];
    let sniper = sniper_over(Arc::clone(&api), fast_policy(2));

    // When
    let confirmation = sniper
        .book_with_retries(&req)
        .await
        .expect("the two free restarts leave the budget intact");

    // Then: 2 aborted passes + 1 counted pass that succeeds on its second
    // combination
    assert_eq!(confirmation.resy_token, "tok-1");
    assert_eq!(api.find_calls(), 4);
}

#[tokio::test]
async fn when_upstream_aborts_a_pass_the_remaining_combinations_are_skipped() {
    // Given: two acceptable days; the upstream dies on the first combination
    // of pass one, then pass two books immediately
    let day = Day::parse("2026-08-08").expect("valid");
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![
            ScriptedStep::Unavailable,
            ScriptedStep::Offer(vec![slot_on(day)]),
        ],
    ));
    let mut req = request(1, "2026-08-08");
    req.date_range = Some(2);
    let sniper = sniper_over(Arc::clone(&api), fast_policy(3));

    // When
    sniper
        .book_with_retries(&req)
        .await
        .expect("restarted pass succeeds");

    // Then: the aborted pass issued exactly one find; the restart began from
    // the first combination again
    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].day, "2026-08-08");
    assert_eq!(calls[1].day, "2026-08-08");
}

#[tokio::test]
async fn when_upstream_never_recovers_the_stall_cap_surfaces_the_outage() {
    // Given: an upstream that fails every pass and a cap of 3 stalls
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![
            ScriptedStep::Unavailable,
            ScriptedStep::Unavailable,
            ScriptedStep::Unavailable,
            ScriptedStep::Unavailable,
        ],
    ));
    let policy = fast_policy(5).with_max_upstream_stalls(3);
    let sniper = sniper_over(Arc::clone(&api), policy);

    // When
    let error = sniper
        .book_with_retries(&request(1, "2026-08-08"))
        .await
        .expect_err("persistent outage must surface");

    // Then: the outage is terminal as Unavailable, not RetriesExhausted
    assert_eq!(error.kind(), BookingErrorKind::Unavailable);
    assert_eq!(api.find_calls(), 3);
}

// =============================================================================
// Search-space traversal
// =============================================================================

#[tokio::test]
async fn combinations_are_tried_date_major_within_a_pass() {
    // Given: days [D, D+1] and party sizes [4, 2], nothing available
    let mut req = request(1, "2026-08-08");
    req.date_range = Some(2);
    req.fallback_party_sizes = vec![PartySize::new(2).expect("valid")];
    let api = Arc::new(ScriptedApi::new());
    let sniper = sniper_over(Arc::clone(&api), fast_policy(1));

    // When: a single pass runs to exhaustion
    sniper
        .book_with_retries(&req)
        .await
        .expect_err("nothing is available");

    // Then: the order is (D,4), (D,2), (D+1,4), (D+1,2)
    let expected = [
        ("2026-08-08", 4),
        ("2026-08-08", 2),
        ("2026-08-09", 4),
        ("2026-08-09", 2),
    ]
    .map(|(day, party_size)| AttemptRecord {
        venue: 1,
        day: String::from(day),
        party_size,
    });
    assert_eq!(api.calls(), expected.to_vec());
}

#[tokio::test]
async fn fallback_party_size_books_without_touching_the_original_request() {
    // Given: the primary size has nothing, the fallback size has a slot
    let day = Day::parse("2026-08-08").expect("valid");
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![
            ScriptedStep::NoSlots,
            ScriptedStep::Offer(vec![slot_on(day)]),
        ],
    ));
    let mut req = request(1, "2026-08-08");
    req.fallback_party_sizes = vec![PartySize::new(2).expect("valid")];
    let sniper = sniper_over(Arc::clone(&api), fast_policy(5));

    // When
    sniper
        .book_with_retries(&req)
        .await
        .expect("fallback size books");

    // Then: exactly two attempts in the pass; the booked attempt carried the
    // fallback size and the caller's request still holds the primary size
    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].party_size, 4);
    assert_eq!(calls[1].party_size, 2);
    assert_eq!(req.party_size.get(), 4);
}

// =============================================================================
// Terminal errors
// =============================================================================

#[tokio::test]
async fn unclassified_errors_propagate_immediately() {
    // Given: a hard client error on the very first combination
    let api = Arc::new(ScriptedApi::new().script(
        1,
        vec![ScriptedStep::Fail(
            tablehawk_tests::BookingError::internal("upstream returned status 403"),
        )],
    ));
    let mut req = request(1, "2026-08-08");
    req.date_range = Some(3);
    let sniper = sniper_over(Arc::clone(&api), fast_policy(5));

    // When
    let error = sniper
        .book_with_retries(&req)
        .await
        .expect_err("terminal error");

    // Then: no further combinations or passes were attempted
    assert_eq!(error.kind(), BookingErrorKind::Internal);
    assert_eq!(api.find_calls(), 1);
}

#[tokio::test]
async fn zero_date_range_is_rejected_before_any_upstream_call() {
    let api = Arc::new(ScriptedApi::new());
    let mut req = request(1, "2026-08-08");
    req.date_range = Some(0);
    let sniper = sniper_over(Arc::clone(&api), fast_policy(5));

    let error = sniper
        .book_with_retries(&req)
        .await
        .expect_err("invalid request");

    assert_eq!(error.kind(), BookingErrorKind::InvalidRequest);
    assert_eq!(api.find_calls(), 0);
}
