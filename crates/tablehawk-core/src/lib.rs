//! # Tablehawk Core
//!
//! Core contracts and the drop-time booking engine for tablehawk.
//!
//! ## Overview
//!
//! Venues release their tables at a known wall-clock instant and the good
//! slots are gone within seconds. This crate provides the pieces that win
//! that race:
//!
//! - **Validated domain models** for venues, days, party sizes, and slots
//! - **Deadline gate** that sleeps until just before the drop instant
//! - **Booking engine** racing a date × party-size plan with bounded retries
//! - **Watchlist coordinator** running isolated pipelines for many venues
//! - **Booking API contract** with a Resy-style HTTP adapter
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Booking API trait, error taxonomy, Resy adapter |
//! | [`clock`] | Wall clock pinned to a startup-captured UTC offset |
//! | [`config`] | Account credentials and payment profile |
//! | [`deadline`] | Drop-instant computation and cooperative waiting |
//! | [`domain`] | Validated domain models |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`notify`] | Outcome delivery (log, webhook) |
//! | [`plan`] | Date-major attempt plan |
//! | [`request`] | Reservation request value objects |
//! | [`retry`] | Retry budget and pacing |
//! | [`selector`] | Slot selection strategies |
//! | [`sniper`] | The booking engine |
//! | [`watchlist`] | Multi-venue fan-out with full join |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use tablehawk_core::{
//!     Clock, ClosestTimeSelector, ReqwestHttpClient, ResyClient, ResyConfig, RetryPolicy,
//!     Sniper, TimedReservationRequest,
//! };
//!
//! async fn snipe(config: &ResyConfig, timed: &TimedReservationRequest) {
//!     let clock = Clock::system(); // capture before spawning the runtime
//!     let http = Arc::new(ReqwestHttpClient::new());
//!     let api = Arc::new(ResyClient::from_config(http, config));
//!     let sniper = Sniper::new(api, Arc::new(ClosestTimeSelector), RetryPolicy::default(), clock);
//!     match sniper.snipe_at_drop(timed).await {
//!         Ok(confirmation) => println!("booked: {}", confirmation.resy_token),
//!         Err(error) => eprintln!("failed: {error}"),
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Booking failures carry a kind the retry loop branches on exhaustively:
//!
//! ```rust
//! use tablehawk_core::{BookingError, BookingErrorKind};
//!
//! fn describe(error: &BookingError) -> &'static str {
//!     match error.kind() {
//!         BookingErrorKind::NoSlots => "try the next combination",
//!         BookingErrorKind::Unavailable => "restart the pass for free",
//!         BookingErrorKind::RetriesExhausted => "budget gone, give up",
//!         _ => "terminal",
//!     }
//! }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod deadline;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod notify;
pub mod plan;
pub mod request;
pub mod retry;
pub mod selector;
pub mod sniper;
pub mod watchlist;

// Re-export commonly used types at crate root for convenience

pub use api::{
    ApiEndpoint, BookOrder, BookToken, BookingApi, BookingError, BookingErrorKind,
    ConfirmationToken, DetailsQuery, FindQuery, ResyClient, VenueHit, VenueQuery,
    DEFAULT_BASE_URL,
};
pub use clock::Clock;
pub use config::ResyConfig;
pub use deadline::{DeadlineGate, EARLY_START};
pub use domain::{Day, PartySize, Slot, SlotTime, VenueId, MAX_PARTY_SIZE};
pub use error::ValidationError;
pub use http_client::{
    ApiCredentials, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use notify::{BookingOutcome, LogNotifier, Notifier, NotifySink, WebhookNotifier};
pub use plan::AttemptPlan;
pub use request::{
    DropTime, ReservationRequest, TimedReservationRequest, Watchlist, WatchlistEntry,
};
pub use retry::RetryPolicy;
pub use selector::{ClosestTimeSelector, Selector};
pub use sniper::Sniper;
pub use watchlist::WatchlistCoordinator;
