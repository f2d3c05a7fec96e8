use time::{OffsetDateTime, UtcOffset};

use crate::domain::Day;

/// Wall clock pinned to a fixed UTC offset.
///
/// Drop times are local wall-clock times, but reading the local offset is
/// only safe before the runtime spawns threads. Callers capture the offset
/// once at startup ([`Clock::system`]) and pass the clock down; tests pin it
/// to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    offset: UtcOffset,
}

impl Clock {
    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub const fn utc() -> Self {
        Self::with_offset(UtcOffset::UTC)
    }

    /// Capture the local UTC offset. Call before starting the async runtime;
    /// once other threads exist the offset may be indeterminate, in which
    /// case the clock falls back to UTC.
    pub fn system() -> Self {
        match UtcOffset::current_local_offset() {
            Ok(offset) => Self::with_offset(offset),
            Err(_) => {
                tracing::warn!("local UTC offset indeterminate, using UTC wall clock");
                Self::utc()
            }
        }
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }

    pub fn today(&self) -> Day {
        Day::new(self.now().date())
    }
}
