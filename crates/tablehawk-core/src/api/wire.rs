//! Serde models for the upstream JSON wire format, converted into domain
//! types at the adapter boundary so nothing upstream-shaped leaks further in.

use serde::{Deserialize, Serialize};

use crate::domain::{Day, Slot, SlotTime, VenueId};

use super::{BookingError, VenueHit};

#[derive(Debug, Deserialize)]
pub(super) struct FindResponse {
    pub results: FindResults,
}

#[derive(Debug, Deserialize)]
pub(super) struct FindResults {
    #[serde(default)]
    pub venues: Vec<FindVenue>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FindVenue {
    #[serde(default)]
    pub slots: Vec<WireSlot>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireSlot {
    pub config: WireSlotConfig,
    pub date: WireSlotDate,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireSlotConfig {
    pub token: String,
    #[serde(rename = "type", default)]
    pub slot_type: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireSlotDate {
    /// `YYYY-MM-DD HH:MM:SS` local to the venue.
    pub start: String,
}

impl WireSlot {
    pub fn into_domain(self) -> Result<Slot, BookingError> {
        let (day_part, time_part) = self.date.start.split_once(' ').ok_or_else(|| {
            BookingError::internal(format!("malformed slot start '{}'", self.date.start))
        })?;

        let day = Day::parse(day_part)
            .map_err(|e| BookingError::internal(format!("slot start day: {e}")))?;
        let start = SlotTime::parse(time_part)
            .map_err(|e| BookingError::internal(format!("slot start time: {e}")))?;

        Ok(Slot {
            config_token: self.config.token,
            slot_type: self.config.slot_type,
            day,
            start,
        })
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DetailsRequestBody<'a> {
    pub config_id: &'a str,
    pub day: String,
    pub party_size: u8,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsResponse {
    pub book_token: WireBookToken,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireBookToken {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PaymentMethod {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct BookResponse {
    pub resy_token: String,
    #[serde(default)]
    pub reservation_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(super) struct VenueSearchBody<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct VenueSearchResponse {
    pub search: VenueSearchHits,
}

#[derive(Debug, Deserialize)]
pub(super) struct VenueSearchHits {
    #[serde(default)]
    pub hits: Vec<WireVenueHit>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireVenueHit {
    pub id: WireVenueIds,
    pub name: String,
    #[serde(default)]
    pub locality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireVenueIds {
    pub resy: u64,
}

impl WireVenueHit {
    pub fn into_domain(self) -> Result<VenueHit, BookingError> {
        let venue_id = VenueId::new(self.id.resy)
            .map_err(|e| BookingError::internal(format!("venue search hit: {e}")))?;

        Ok(VenueHit {
            venue_id,
            name: self.name,
            locality: self.locality,
        })
    }
}
