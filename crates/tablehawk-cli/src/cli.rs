//! CLI argument definitions for tablehawk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `snipe` | Book one reservation at its drop time |
//! | `watch` | Track a watchlist of venues concurrently |
//! | `search` | Look up venue ids by name |
//!
//! # Examples
//!
//! ```bash
//! # Book a single reservation the moment it drops
//! tablehawk snipe resy.json reservation.json
//!
//! # Track several venues at once
//! tablehawk watch resy.json watchlist.json
//!
//! # Find a venue id
//! tablehawk search resy.json "izakaya"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drop-time reservation sniping toolkit.
///
/// Waits for the instant a venue releases its tables, then races through
/// your acceptable dates and party sizes until a slot is booked.
#[derive(Debug, Parser)]
#[command(
    name = "tablehawk",
    author,
    version,
    about = "Drop-time reservation sniping toolkit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Book one reservation the moment it drops.
    Snipe {
        /// Path to the account config JSON (api key, auth token, payment).
        config: PathBuf,
        /// Path to the timed reservation request JSON.
        reservation: PathBuf,
    },
    /// Track a watchlist of venues, one independent pipeline each.
    Watch {
        /// Path to the account config JSON.
        config: PathBuf,
        /// Path to the watchlist JSON (array of entries).
        watchlist: PathBuf,
    },
    /// Look up venue ids by name.
    Search {
        /// Path to the account config JSON.
        config: PathBuf,
        /// Free-text venue query.
        query: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_snipe_invocation() {
        let cli = Cli::try_parse_from(["tablehawk", "snipe", "resy.json", "res.json"])
            .expect("valid invocation");
        assert!(matches!(cli.command, Command::Snipe { .. }));
    }

    #[test]
    fn parses_search_invocation() {
        let cli = Cli::try_parse_from(["tablehawk", "search", "resy.json", "izakaya"])
            .expect("valid invocation");
        match cli.command {
            Command::Search { query, .. } => assert_eq!(query, "izakaya"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
