use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("booking failed: {0}")]
    Booking(#[from] tablehawk_core::BookingError),

    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    ParseFile {
        path: String,
        source: serde_json::Error,
    },
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Booking(_) => 3,
            Self::ParseFile { .. } => 4,
            Self::ReadFile { .. } => 10,
        }
    }
}
