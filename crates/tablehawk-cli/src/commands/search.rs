use std::path::Path;
use std::sync::Arc;

use tablehawk_core::{BookingApi, ReqwestHttpClient, ResyClient, ResyConfig, VenueQuery};

use crate::error::CliError;

use super::read_json;

/// Venue lookup: resolve ids for the config files by name.
pub async fn run(config_path: &Path, query: &str) -> Result<(), CliError> {
    let config: ResyConfig = read_json(config_path)?;
    let client = ResyClient::from_config(Arc::new(ReqwestHttpClient::new()), &config);

    let hits = client
        .search_venues(VenueQuery {
            query: String::from(query),
        })
        .await?;

    if hits.is_empty() {
        println!("no venues matched '{query}'");
        return Ok(());
    }

    for hit in hits {
        match hit.locality {
            Some(locality) => println!("{}\t{} ({locality})", hit.venue_id, hit.name),
            None => println!("{}\t{}", hit.venue_id, hit.name),
        }
    }

    Ok(())
}
