use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Upstream identifier of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct VenueId(u64);

impl VenueId {
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::ZeroVenueId);
        }
        Ok(Self(id))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for VenueId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for VenueId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VenueId> for u64 {
    fn from(value: VenueId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_venue_id() {
        assert_eq!(VenueId::new(0), Err(ValidationError::ZeroVenueId));
    }

    #[test]
    fn deserializes_from_number() {
        let id: VenueId = serde_json::from_str("4411").expect("valid id");
        assert_eq!(id.get(), 4411);
    }
}
