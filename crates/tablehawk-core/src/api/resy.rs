use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::config::ResyConfig;
use crate::domain::Slot;
use crate::http_client::{ApiCredentials, HttpClient, HttpRequest, HttpResponse};

use super::wire;
use super::{
    ApiEndpoint, BookOrder, BookToken, BookingApi, BookingError, ConfirmationToken, DetailsQuery,
    FindQuery, VenueHit, VenueQuery, DEFAULT_BASE_URL,
};

/// Booking adapter for the Resy-style HTTP API.
#[derive(Clone)]
pub struct ResyClient {
    http: Arc<dyn HttpClient>,
    credentials: ApiCredentials,
    payment_method_id: u64,
    base_url: String,
}

impl ResyClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        credentials: ApiCredentials,
        payment_method_id: u64,
    ) -> Self {
        Self {
            http,
            credentials,
            payment_method_id,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn from_config(http: Arc<dyn HttpClient>, config: &ResyConfig) -> Self {
        Self::new(http, config.credentials(), config.payment_method_id)
            .with_base_url(config.base_url())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BookingError> {
        let response = self.http.execute(request).await.map_err(|error| {
            if error.retryable() {
                BookingError::unavailable(format!("transport error: {}", error.message()))
            } else {
                BookingError::internal(format!("transport error: {}", error.message()))
            }
        })?;

        if response.is_server_error() || response.status == 429 {
            return Err(BookingError::unavailable(format!(
                "upstream returned status {}",
                response.status
            )));
        }
        if !response.is_success() {
            return Err(BookingError::internal(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        Ok(response)
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, BookingError> {
        serde_json::from_str(body)
            .map_err(|e| BookingError::internal(format!("undecodable upstream body: {e}")))
    }
}

impl BookingApi for ResyClient {
    fn find_slots<'a>(
        &'a self,
        query: FindQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Slot>, BookingError>> + Send + 'a>> {
        Box::pin(async move {
            let day = query.day.format();
            let url = format!(
                "{}?lat=0&long=0&venue_id={}&party_size={}&day={}",
                self.url(ApiEndpoint::Find),
                query.venue_id,
                query.party_size,
                urlencoding::encode(&day),
            );

            let request = HttpRequest::get(url).with_credentials(&self.credentials);
            let response = self.execute(request).await?;

            let decoded: wire::FindResponse = Self::decode(&response.body)?;
            let slots = decoded
                .results
                .venues
                .into_iter()
                .flat_map(|venue| venue.slots)
                .map(wire::WireSlot::into_domain)
                .collect::<Result<Vec<_>, _>>()?;

            debug!(venue = %query.venue_id, day = %query.day, count = slots.len(), "find returned slots");
            Ok(slots)
        })
    }

    fn booking_details<'a>(
        &'a self,
        query: DetailsQuery,
    ) -> Pin<Box<dyn Future<Output = Result<BookToken, BookingError>> + Send + 'a>> {
        Box::pin(async move {
            let body = wire::DetailsRequestBody {
                config_id: &query.config_token,
                day: query.day.format(),
                party_size: query.party_size.get(),
            };
            let body = serde_json::to_string(&body)
                .map_err(|e| BookingError::internal(format!("details body: {e}")))?;

            let request = HttpRequest::post(self.url(ApiEndpoint::Details))
                .with_credentials(&self.credentials)
                .with_json_body(body);
            let response = self.execute(request).await?;

            let decoded: wire::DetailsResponse = Self::decode(&response.body)?;
            Ok(BookToken {
                value: decoded.book_token.value,
            })
        })
    }

    fn book<'a>(
        &'a self,
        order: BookOrder,
    ) -> Pin<Box<dyn Future<Output = Result<ConfirmationToken, BookingError>> + Send + 'a>> {
        Box::pin(async move {
            let payment = serde_json::to_string(&wire::PaymentMethod {
                id: self.payment_method_id,
            })
            .map_err(|e| BookingError::internal(format!("payment method: {e}")))?;

            let body = format!(
                "book_token={}&struct_payment_method={}&source_id=resy.com-venue-details",
                urlencoding::encode(&order.book_token),
                urlencoding::encode(&payment),
            );

            let request = HttpRequest::post(self.url(ApiEndpoint::Book))
                .with_credentials(&self.credentials)
                .with_form_body(body);
            let response = self.execute(request).await?;

            let decoded: wire::BookResponse = Self::decode(&response.body)?;
            Ok(ConfirmationToken {
                resy_token: decoded.resy_token,
                reservation_id: decoded.reservation_id,
            })
        })
    }

    fn search_venues<'a>(
        &'a self,
        query: VenueQuery,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VenueHit>, BookingError>> + Send + 'a>> {
        Box::pin(async move {
            let body = serde_json::to_string(&wire::VenueSearchBody {
                query: &query.query,
            })
            .map_err(|e| BookingError::internal(format!("search body: {e}")))?;

            let request = HttpRequest::post(self.url(ApiEndpoint::VenueSearch))
                .with_credentials(&self.credentials)
                .with_json_body(body);
            let response = self.execute(request).await?;

            let decoded: wire::VenueSearchResponse = Self::decode(&response.body)?;
            decoded
                .search
                .hits
                .into_iter()
                .map(wire::WireVenueHit::into_domain)
                .collect()
        })
    }
}
