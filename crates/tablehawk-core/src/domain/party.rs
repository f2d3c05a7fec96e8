use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MAX_PARTY_SIZE: u8 = 20;

/// Number of guests a slot must seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PartySize(u8);

impl PartySize {
    pub fn new(size: u8) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::ZeroPartySize);
        }
        if size > MAX_PARTY_SIZE {
            return Err(ValidationError::PartySizeTooLarge {
                size,
                max: MAX_PARTY_SIZE,
            });
        }
        Ok(Self(size))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for PartySize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PartySize {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(value: PartySize) -> Self {
        value.0
    }
}
