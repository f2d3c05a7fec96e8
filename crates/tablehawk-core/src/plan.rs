use crate::api::BookingError;
use crate::domain::{Day, PartySize};
use crate::request::ReservationRequest;

/// The search space for one acquisition: every (day, party size) combination
/// a request is willing to accept, precomputed once and traversed date-major
/// on every pass.
///
/// Date-major because the earliest acceptable day beats a bigger table on a
/// later day; party-size fallback is the finer-grained second choice within
/// a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptPlan {
    days: Vec<Day>,
    sizes: Vec<PartySize>,
}

impl AttemptPlan {
    pub fn build(request: &ReservationRequest, today: Day) -> Result<Self, BookingError> {
        let primary = request.target_day(today)?;

        let span = request.date_range.unwrap_or(1);
        if span == 0 {
            return Err(crate::ValidationError::EmptyDateRange.into());
        }
        let days = primary.consecutive(span);

        let mut sizes = Vec::with_capacity(1 + request.fallback_party_sizes.len());
        sizes.push(request.party_size);
        sizes.extend(request.fallback_party_sizes.iter().copied());

        Ok(Self { days, sizes })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn sizes(&self) -> &[PartySize] {
        &self.sizes
    }

    /// Number of combinations in one full pass.
    pub fn len(&self) -> usize {
        self.days.len() * self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Date-major traversal: all party sizes for a day before the next day.
    pub fn combinations(&self) -> impl Iterator<Item = (Day, PartySize)> + '_ {
        self.days
            .iter()
            .flat_map(move |day| self.sizes.iter().map(move |size| (*day, *size)))
    }
}
