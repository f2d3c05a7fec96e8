use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValidationError;

use super::Day;

/// Wall-clock time of day a slot starts at, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { minute });
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM` or `HH:MM:SS`; seconds are ignored.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidSlotTime {
            value: input.to_owned(),
        };

        let mut parts = input.trim().splitn(3, ':');
        let hour = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        let minute = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            if seconds.parse::<u8>().is_err() {
                return Err(invalid());
            }
        }

        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn minutes_of_day(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Absolute distance to another time of day, in minutes.
    pub fn distance_minutes(self, other: Self) -> u16 {
        self.minutes_of_day().abs_diff(other.minutes_of_day())
    }
}

impl Display for SlotTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for SlotTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// One bookable slot offered by the upstream find endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Opaque upstream token identifying the slot configuration; needed to
    /// fetch the booking token.
    pub config_token: String,
    /// Seating area label, e.g. "Dining Room" or "Patio".
    pub slot_type: String,
    pub day: Day,
    pub start: SlotTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        let time = SlotTime::parse("19:30").expect("valid");
        assert_eq!((time.hour(), time.minute()), (19, 30));
    }

    #[test]
    fn parses_hh_mm_ss_ignoring_seconds() {
        let time = SlotTime::parse("07:05:59").expect("valid");
        assert_eq!((time.hour(), time.minute()), (7, 5));
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert!(matches!(
            SlotTime::parse("24:00"),
            Err(ValidationError::InvalidSlotTime { .. })
        ));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = SlotTime::new(19, 0).expect("valid");
        let b = SlotTime::new(20, 30).expect("valid");
        assert_eq!(a.distance_minutes(b), 90);
        assert_eq!(b.distance_minutes(a), 90);
    }
}
