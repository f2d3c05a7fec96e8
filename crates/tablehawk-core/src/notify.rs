//! Outcome delivery.
//!
//! Notifiers must never fail the orchestration: delivery problems are logged
//! and swallowed here, not surfaced to the booking engine.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::api::{BookingError, ConfirmationToken};
use crate::http_client::{HttpClient, HttpRequest};
use crate::request::ReservationRequest;

/// Per-entry delivery target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotifySink {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub webhook_url: String,
}

const fn default_enabled() -> bool {
    true
}

/// Final result of one booking pipeline, formatted for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingOutcome {
    pub label: String,
    pub success: bool,
    pub details: String,
}

impl BookingOutcome {
    pub fn booked(
        label: impl Into<String>,
        request: &ReservationRequest,
        confirmation: &ConfirmationToken,
    ) -> Self {
        let label = label.into();
        Self {
            details: format!(
                "Booking confirmed for {label}.\n\nResy token: {}\n\nReservation details:\n  Venue ID: {}\n  Party size: {}\n  Preferred time: {}",
                confirmation.resy_token,
                request.venue_id,
                request.party_size,
                request.ideal_time,
            ),
            label,
            success: true,
        }
    }

    pub fn failed(
        label: impl Into<String>,
        request: &ReservationRequest,
        error: &BookingError,
    ) -> Self {
        let label = label.into();
        Self {
            details: format!(
                "Booking failed for {label}.\n\nError: {error}\n\nReservation details:\n  Venue ID: {}\n  Party size: {}",
                request.venue_id,
                request.party_size,
            ),
            label,
            success: false,
        }
    }
}

/// Outcome delivery contract. Infallible at the call site.
pub trait Notifier: Send + Sync {
    fn notify<'a>(
        &'a self,
        outcome: &'a BookingOutcome,
        sink: Option<&'a NotifySink>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Logs outcomes through tracing; the fallback when no sink is configured.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify<'a>(
        &'a self,
        outcome: &'a BookingOutcome,
        _sink: Option<&'a NotifySink>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            if outcome.success {
                info!(label = %outcome.label, "{}", outcome.details);
            } else {
                error!(label = %outcome.label, "{}", outcome.details);
            }
        })
    }
}

/// POSTs the outcome as JSON to the sink's webhook, falling back to the log
/// when no sink is configured for an entry.
pub struct WebhookNotifier {
    http: Arc<dyn HttpClient>,
}

impl WebhookNotifier {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }
}

impl Notifier for WebhookNotifier {
    fn notify<'a>(
        &'a self,
        outcome: &'a BookingOutcome,
        sink: Option<&'a NotifySink>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let Some(sink) = sink.filter(|s| s.enabled) else {
                LogNotifier.notify(outcome, None).await;
                return;
            };

            let body = match serde_json::to_string(outcome) {
                Ok(body) => body,
                Err(e) => {
                    warn!(label = %outcome.label, error = %e, "could not encode outcome, skipping webhook");
                    return;
                }
            };

            let request = HttpRequest::post(&sink.webhook_url).with_json_body(body);
            match self.http.execute(request).await {
                Ok(response) if response.is_success() => {
                    info!(label = %outcome.label, "outcome delivered to webhook");
                }
                Ok(response) => {
                    warn!(
                        label = %outcome.label,
                        status = response.status,
                        "webhook rejected outcome"
                    );
                }
                Err(e) => {
                    warn!(label = %outcome.label, error = %e, "webhook delivery failed");
                }
            }
        })
    }
}
