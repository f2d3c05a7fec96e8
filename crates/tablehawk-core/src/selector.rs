use crate::domain::Slot;
use crate::request::ReservationRequest;

/// Strategy that picks one slot from a non-empty offer list. Pure: no side
/// effects, no upstream calls.
pub trait Selector: Send + Sync {
    fn select(&self, slots: &[Slot], request: &ReservationRequest) -> Option<Slot>;
}

/// Default strategy: prefer slots in the requested seating area when any
/// exist, then take the one starting closest to the ideal time.
#[derive(Debug, Default)]
pub struct ClosestTimeSelector;

impl Selector for ClosestTimeSelector {
    fn select(&self, slots: &[Slot], request: &ReservationRequest) -> Option<Slot> {
        let preferred: Vec<&Slot> = match &request.preferred_slot_type {
            Some(wanted) => {
                let matching: Vec<&Slot> = slots
                    .iter()
                    .filter(|slot| slot.slot_type.eq_ignore_ascii_case(wanted))
                    .collect();
                if matching.is_empty() {
                    slots.iter().collect()
                } else {
                    matching
                }
            }
            None => slots.iter().collect(),
        };

        preferred
            .into_iter()
            .min_by_key(|slot| slot.start.distance_minutes(request.ideal_time))
            .cloned()
    }
}
