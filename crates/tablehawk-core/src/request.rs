//! Reservation request value objects.
//!
//! All of these are immutable once constructed: the booking engine derives
//! per-combination variants with [`ReservationRequest::with_overrides`]
//! instead of mutating a request in place, so the original stays intact for
//! later combinations and for notification text.

use serde::{Deserialize, Serialize};

use crate::domain::{Day, PartySize, SlotTime, VenueId};
use crate::notify::NotifySink;
use crate::ValidationError;

/// What to book: the venue, the party, and the acceptable alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub venue_id: VenueId,
    pub party_size: PartySize,
    /// Primary day to book. Optional only when `days_in_advance` governs.
    #[serde(default)]
    pub ideal_day: Option<Day>,
    /// Preferred time of day; the selector books the closest offered slot.
    pub ideal_time: SlotTime,
    /// Accept this many consecutive days starting at the primary day.
    #[serde(default)]
    pub date_range: Option<u32>,
    /// Party sizes to fall back to, tried in the given order after the
    /// primary size.
    #[serde(default)]
    pub fallback_party_sizes: Vec<PartySize>,
    /// Book `today + n` instead of `ideal_day`. Cleared on derived variants,
    /// where an explicit day governs.
    #[serde(default)]
    pub days_in_advance: Option<u32>,
    /// Seating area to prefer when several slot types are offered.
    #[serde(default)]
    pub preferred_slot_type: Option<String>,
}

impl ReservationRequest {
    /// Resolve the primary day this request targets.
    pub fn target_day(&self, today: Day) -> Result<Day, ValidationError> {
        if let Some(days) = self.days_in_advance {
            return Ok(today.plus_days(days));
        }
        self.ideal_day.ok_or(ValidationError::MissingTargetDay)
    }

    /// Derive the variant for one (day, party size) combination. The
    /// explicit day overrides any relative-date mode.
    pub fn with_overrides(&self, day: Day, party_size: PartySize) -> Self {
        Self {
            ideal_day: Some(day),
            days_in_advance: None,
            party_size,
            ..self.clone()
        }
    }
}

/// Expected drop time, local wall clock, today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDropTime")]
pub struct DropTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Deserialize)]
struct RawDropTime {
    hour: u8,
    minute: u8,
}

impl DropTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl TryFrom<RawDropTime> for DropTime {
    type Error = ValidationError;

    fn try_from(raw: RawDropTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

/// A reservation request plus the moment its venue releases tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimedReservationRequest {
    pub reservation: ReservationRequest,
    pub drop_time: DropTime,
    /// Where to deliver the outcome, if anywhere beyond the log.
    #[serde(default)]
    pub notify: Option<NotifySink>,
}

/// One tracked venue in a watchlist. Duplicate venues are legal and run as
/// independent pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchlistEntry {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub timed: TimedReservationRequest,
}

impl WatchlistEntry {
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("venue {}", self.timed.reservation.venue_id))
    }
}

/// Ordered, non-empty collection of watchlist entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<WatchlistEntry>")]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyWatchlist);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WatchlistEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<WatchlistEntry>> for Watchlist {
    type Error = ValidationError;

    fn try_from(entries: Vec<WatchlistEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            venue_id: VenueId::new(4411).expect("valid"),
            party_size: PartySize::new(4).expect("valid"),
            ideal_day: Some(Day::new(date!(2026 - 08 - 08))),
            ideal_time: SlotTime::new(19, 0).expect("valid"),
            date_range: None,
            fallback_party_sizes: vec![],
            days_in_advance: None,
            preferred_slot_type: None,
        }
    }

    #[test]
    fn target_day_uses_ideal_day_by_default() {
        let today = Day::new(date!(2026 - 08 - 01));
        assert_eq!(
            request().target_day(today).expect("resolvable"),
            Day::new(date!(2026 - 08 - 08))
        );
    }

    #[test]
    fn days_in_advance_overrides_ideal_day() {
        let mut req = request();
        req.days_in_advance = Some(30);
        let today = Day::new(date!(2026 - 08 - 01));
        assert_eq!(
            req.target_day(today).expect("resolvable"),
            Day::new(date!(2026 - 08 - 31))
        );
    }

    #[test]
    fn missing_both_day_modes_is_a_validation_error() {
        let mut req = request();
        req.ideal_day = None;
        let today = Day::new(date!(2026 - 08 - 01));
        assert_eq!(
            req.target_day(today),
            Err(ValidationError::MissingTargetDay)
        );
    }

    #[test]
    fn with_overrides_clears_relative_mode_and_keeps_original() {
        let mut original = request();
        original.days_in_advance = Some(14);

        let variant = original.with_overrides(
            Day::new(date!(2026 - 08 - 09)),
            PartySize::new(2).expect("valid"),
        );

        assert_eq!(variant.ideal_day, Some(Day::new(date!(2026 - 08 - 09))));
        assert_eq!(variant.days_in_advance, None);
        assert_eq!(variant.party_size.get(), 2);
        // The original is untouched.
        assert_eq!(original.days_in_advance, Some(14));
        assert_eq!(original.party_size.get(), 4);
    }

    #[test]
    fn drop_time_rejects_out_of_range_components() {
        assert!(matches!(
            DropTime::new(24, 0),
            Err(ValidationError::HourOutOfRange { hour: 24 })
        ));
        assert!(matches!(
            DropTime::new(10, 60),
            Err(ValidationError::MinuteOutOfRange { minute: 60 })
        ));
    }

    #[test]
    fn watchlist_rejects_empty_collection() {
        assert_eq!(
            Watchlist::new(vec![]),
            Err(ValidationError::EmptyWatchlist)
        );
    }

    #[test]
    fn watchlist_deserializes_from_entry_array() {
        let json = r#"[{
            "label": "backup patio",
            "reservation": {
                "venue_id": 4411,
                "party_size": 2,
                "ideal_day": "2026-08-08",
                "ideal_time": "19:00"
            },
            "drop_time": {"hour": 10, "minute": 0}
        }]"#;

        let watchlist: Watchlist = serde_json::from_str(json).expect("valid watchlist");
        assert_eq!(watchlist.len(), 1);
        assert_eq!(watchlist.entries()[0].display_label(), "backup patio");
    }

    #[test]
    fn unlabeled_entry_falls_back_to_venue_label() {
        let json = r#"[{
            "reservation": {
                "venue_id": 77,
                "party_size": 2,
                "ideal_day": "2026-08-08",
                "ideal_time": "18:30"
            },
            "drop_time": {"hour": 9, "minute": 30}
        }]"#;

        let watchlist: Watchlist = serde_json::from_str(json).expect("valid watchlist");
        assert_eq!(watchlist.entries()[0].display_label(), "venue 77");
    }
}
