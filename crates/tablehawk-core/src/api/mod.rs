//! Booking API contract and request/response types.
//!
//! This module defines the transport-facing contract ([`BookingApi`]) the
//! booking engine drives, along with the error taxonomy the retry loop
//! branches on.
//!
//! # Endpoints
//!
//! | Endpoint | Request | Response | Description |
//! |----------|---------|----------|-------------|
//! | Find | [`FindQuery`] | `Vec<Slot>` | Slots for one (day, party size) |
//! | Details | [`DetailsQuery`] | [`BookToken`] | Booking token for a slot |
//! | Book | [`BookOrder`] | [`ConfirmationToken`] | Commit the booking |
//! | VenueSearch | [`VenueQuery`] | `Vec<VenueHit>` | Venue lookup by name |
//!
//! An empty slot list from Find is a legitimate "nothing available" result,
//! not an error; the engine turns it into [`BookingErrorKind::NoSlots`] so
//! the pass can advance to the next combination.

mod resy;
mod wire;

pub use resy::ResyClient;

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::domain::{Day, PartySize, Slot, VenueId};
use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://api.resy.com";

/// Upstream endpoint paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    Find,
    Details,
    Book,
    VenueSearch,
}

impl ApiEndpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Find => "/4/find",
            Self::Details => "/3/details",
            Self::Book => "/3/book",
            Self::VenueSearch => "/3/venuesearch/search",
        }
    }
}

impl Display for ApiEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Booking failure classification.
///
/// The retry loop's three-way recovery branch is total over this enum:
/// `NoSlots` advances within a pass, `Unavailable` restarts the pass for
/// free, everything else is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingErrorKind {
    /// Zero slots matched one exact (day, party size) combination.
    NoSlots,
    /// Transient upstream failure, distinct from "nothing available".
    Unavailable,
    /// The bounded retry budget ran out without a booking.
    RetriesExhausted,
    InvalidRequest,
    Internal,
}

/// Structured booking error used by the retry orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingError {
    kind: BookingErrorKind,
    message: String,
}

impl BookingError {
    pub fn no_slots(message: impl Into<String>) -> Self {
        Self {
            kind: BookingErrorKind::NoSlots,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: BookingErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn retries_exhausted(message: impl Into<String>) -> Self {
        Self {
            kind: BookingErrorKind::RetriesExhausted,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: BookingErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: BookingErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> BookingErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            BookingErrorKind::NoSlots => "booking.no_slots",
            BookingErrorKind::Unavailable => "booking.unavailable",
            BookingErrorKind::RetriesExhausted => "booking.retries_exhausted",
            BookingErrorKind::InvalidRequest => "booking.invalid_request",
            BookingErrorKind::Internal => "booking.internal",
        }
    }
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for BookingError {}

impl From<ValidationError> for BookingError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_request(error.to_string())
    }
}

/// Query for the find endpoint: slots for one exact (day, party size) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub venue_id: VenueId,
    pub party_size: PartySize,
    pub day: Day,
}

/// Query for the details endpoint, keyed by the selected slot's config token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsQuery {
    pub config_token: String,
    pub party_size: PartySize,
    pub day: Day,
}

/// Short-lived token that authorizes one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookToken {
    pub value: String,
}

/// Commit order for the book endpoint. Payment details are attached by the
/// client from its configured payment profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOrder {
    pub book_token: String,
}

/// Confirmed booking returned by the book endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationToken {
    pub resy_token: String,
    pub reservation_id: Option<u64>,
}

/// Venue lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueQuery {
    pub query: String,
}

/// One venue search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueHit {
    pub venue_id: VenueId,
    pub name: String,
    pub locality: Option<String>,
}

/// Transport collaborator contract the booking engine drives.
///
/// Implementations must be stateless request issuers: the watchlist
/// coordinator shares one client across all workers.
pub trait BookingApi: Send + Sync {
    fn find_slots<'a>(
        &'a self,
        query: FindQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Slot>, BookingError>> + Send + 'a>>;

    fn booking_details<'a>(
        &'a self,
        query: DetailsQuery,
    ) -> Pin<Box<dyn Future<Output = Result<BookToken, BookingError>> + Send + 'a>>;

    fn book<'a>(
        &'a self,
        order: BookOrder,
    ) -> Pin<Box<dyn Future<Output = Result<ConfirmationToken, BookingError>> + Send + 'a>>;

    fn search_venues<'a>(
        &'a self,
        query: VenueQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VenueHit>, BookingError>> + Send + 'a>>;
}
