use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar day a reservation is wanted for. Slots are compared by day only,
/// never by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(Date);

impl Day {
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay {
                value: input.to_owned(),
            })
    }

    /// The day immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0.next_day().expect("calendar day overflow"))
    }

    pub fn plus_days(self, days: u32) -> Self {
        let mut day = self;
        for _ in 0..days {
            day = day.next();
        }
        day
    }

    /// `count` strictly consecutive days starting at `self`, ascending.
    pub fn consecutive(self, count: u32) -> Vec<Self> {
        let mut days = Vec::with_capacity(count as usize);
        let mut day = self;
        for _ in 0..count {
            days.push(day);
            day = day.next();
        }
        days
    }

    pub const fn as_date(self) -> Date {
        self.0
    }

    pub fn format(self) -> String {
        self.0
            .format(DAY_FORMAT)
            .expect("Day must be YYYY-MM-DD formattable")
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
