use thiserror::Error;

/// Validation and contract errors exposed by `tablehawk-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("venue id must be greater than zero")]
    ZeroVenueId,

    #[error("party size must seat at least one guest")]
    ZeroPartySize,
    #[error("party size {size} exceeds max {max}")]
    PartySizeTooLarge { size: u8, max: u8 },

    #[error("invalid calendar day '{value}', expected YYYY-MM-DD")]
    InvalidDay { value: String },
    #[error("date range must cover at least one day")]
    EmptyDateRange,

    #[error("hour {hour} out of range 0..=23")]
    HourOutOfRange { hour: u8 },
    #[error("minute {minute} out of range 0..=59")]
    MinuteOutOfRange { minute: u8 },
    #[error("invalid slot time '{value}', expected HH:MM or HH:MM:SS")]
    InvalidSlotTime { value: String },

    #[error("reservation request needs an ideal day or days_in_advance")]
    MissingTargetDay,

    #[error("watchlist must contain at least one entry")]
    EmptyWatchlist,

    #[error("retry delay must be positive")]
    ZeroRetryDelay,
    #[error("retry budget must allow at least one pass")]
    ZeroRetryBudget,
}
