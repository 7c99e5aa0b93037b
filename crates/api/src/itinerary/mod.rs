//! The travel-details notification composer.
//!
//! Orchestrates one send: validate the request, load the trip bundle and
//! the selected passengers, then per passenger run the preference gate,
//! resolve the contact identity, render the requested sections, attempt
//! delivery per channel, and record one communication receipt per attempt.
//!
//! Passengers are processed independently: a failure for one never aborts
//! the others, and per-channel problems are accumulated, never raised.
//! Receipts already written stand even if later passengers fail.

pub mod contact;
pub mod content;

use maison_core::error::CoreError;
use maison_core::itinerary::{check_gate, normalize_phone, ContactCard};
use maison_core::travel::{Channel, ContentType, DeliveryChannel, DeliveryStatus, PersonType};
use maison_core::types::DbId;
use maison_db::models::communication::{CommunicationReceipt, CreateCommunicationReceipt};
use maison_db::models::passenger::Passenger;
use maison_db::repositories::{CommunicationRepo, PassengerRepo, TripRepo};
use maison_notify::{ChatMessage, EmailMessage, Transport};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Body of `POST /trips/{trip_id}/send-details`.
///
/// Content types and channel arrive as strings and are parsed explicitly so
/// unknown values surface as 400s with a reason, not as body rejections.
#[derive(Debug, Deserialize)]
pub struct SendDetailsRequest {
    #[serde(default)]
    pub passenger_ids: Vec<DbId>,
    #[serde(default)]
    pub content_types: Vec<String>,
    pub communication_type: Option<String>,
    pub custom_message: Option<String>,
}

/// One non-fatal problem encountered while processing a passenger.
#[derive(Debug, Clone, Serialize)]
pub struct SendError {
    pub passenger_id: DbId,
    pub person_type: String,
    pub person_id: DbId,
    /// Set for per-channel problems, absent for whole-passenger skips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub reason: String,
}

/// Aggregate result of one send.
#[derive(Debug, Serialize)]
pub struct SendDetailsReport {
    pub communications_sent: usize,
    pub errors: usize,
    pub details: SendDetailsDetails,
}

#[derive(Debug, Serialize)]
pub struct SendDetailsDetails {
    pub communications: Vec<CommunicationReceipt>,
    pub errors: Vec<SendError>,
}

// ---------------------------------------------------------------------------
// Channel planning
// ---------------------------------------------------------------------------

/// A single delivery the composer has decided to attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DeliveryPlan {
    Email { to: String },
    Whatsapp { to: String },
}

/// Decide which channels can actually be attempted for a contact.
///
/// A requested channel without its contact field yields an error entry
/// instead of a plan; the other channel is unaffected.
fn plan_channels(
    channel: Channel,
    card: &ContactCard,
    default_country_code: Option<&str>,
) -> (Vec<DeliveryPlan>, Vec<(DeliveryChannel, String)>) {
    let mut plans = Vec::new();
    let mut errors = Vec::new();

    if channel.wants_email() {
        match &card.email {
            Some(to) => plans.push(DeliveryPlan::Email { to: to.clone() }),
            None => errors.push((
                DeliveryChannel::Email,
                "no email address available".to_string(),
            )),
        }
    }

    if channel.wants_whatsapp() {
        match card
            .phone
            .as_deref()
            .and_then(|raw| normalize_phone(raw, default_country_code))
        {
            Some(to) => plans.push(DeliveryPlan::Whatsapp { to }),
            None => errors.push((
                DeliveryChannel::Whatsapp,
                "no phone number available".to_string(),
            )),
        }
    }

    (plans, errors)
}

// ---------------------------------------------------------------------------
// Composer
// ---------------------------------------------------------------------------

fn skip_error(passenger: &Passenger, reason: impl Into<String>) -> SendError {
    SendError {
        passenger_id: passenger.id,
        person_type: passenger.person_type.clone(),
        person_id: passenger.person_id,
        channel: None,
        reason: reason.into(),
    }
}

/// Run one send end to end. Validation and missing-trip/missing-passenger
/// failures abort with no receipts written; everything after that is
/// recovered per passenger and per channel.
pub async fn send_travel_details(
    pool: &PgPool,
    transport: &dyn Transport,
    default_country_code: Option<&str>,
    trip_id: DbId,
    request: &SendDetailsRequest,
) -> AppResult<SendDetailsReport> {
    // --- Validation (aborts, zero receipts) ---
    if request.passenger_ids.is_empty() {
        return Err(CoreError::Validation("No passengers selected".into()).into());
    }
    if request.content_types.is_empty() {
        return Err(CoreError::Validation("No content types selected".into()).into());
    }
    let channel = Channel::parse(request.communication_type.as_deref().unwrap_or(""))?;
    let types = request
        .content_types
        .iter()
        .map(|value| ContentType::parse(value))
        .collect::<Result<Vec<_>, _>>()?;

    let bundle = TripRepo::find_bundle(pool, trip_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    let passengers =
        PassengerRepo::find_by_ids_for_trip(pool, &request.passenger_ids, trip_id).await?;
    if passengers.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Passengers",
            id: trip_id,
        }
        .into());
    }

    let label = ContentType::join_labels(&types);
    let subject = format!("Travel details for trip {}", bundle.trip.request_number);

    let mut communications: Vec<CommunicationReceipt> = Vec::new();
    let mut errors: Vec<SendError> = Vec::new();

    // --- Per passenger, independent ---
    for passenger in &passengers {
        if let Err(reason) = check_gate(passenger.preference(), passenger.content_flags(), &types)
        {
            errors.push(skip_error(passenger, reason.to_string()));
            continue;
        }

        let person_type = match PersonType::parse(&passenger.person_type) {
            Ok(person_type) => person_type,
            Err(_) => {
                errors.push(skip_error(passenger, "unknown person type"));
                continue;
            }
        };

        let person = match contact::resolve_person(pool, person_type, passenger.person_id).await {
            Ok(Some(person)) => person,
            Ok(None) => {
                errors.push(skip_error(passenger, "person details not found"));
                continue;
            }
            Err(e) => {
                tracing::warn!(
                    passenger_id = passenger.id,
                    error = %e,
                    "Identity lookup failed"
                );
                errors.push(skip_error(passenger, "person details not found"));
                continue;
            }
        };
        let card = person.contact_card();

        let rendered = content::render_content(
            &bundle,
            &passenger.person_type,
            passenger.person_id,
            &types,
            request.custom_message.as_deref(),
        );

        let (plans, channel_errors) = plan_channels(channel, &card, default_country_code);
        for (delivery_channel, reason) in channel_errors {
            errors.push(SendError {
                channel: Some(delivery_channel.as_str().to_string()),
                ..skip_error(passenger, reason)
            });
        }

        // --- Per channel, independent: one receipt per attempt ---
        for plan in plans {
            let (delivery_channel, outcome, body_text, body_html, receipt_subject) = match &plan {
                DeliveryPlan::Email { to } => {
                    let html = format!("<html><body>{}</body></html>", rendered.html);
                    let outcome = transport
                        .send_email(&EmailMessage {
                            to: to.clone(),
                            subject: subject.clone(),
                            text: rendered.text.clone(),
                            html: Some(html.clone()),
                        })
                        .await;
                    (
                        DeliveryChannel::Email,
                        outcome,
                        rendered.text.clone(),
                        Some(html),
                        Some(subject.clone()),
                    )
                }
                DeliveryPlan::Whatsapp { to } => {
                    let outcome = transport
                        .send_chat(&ChatMessage {
                            to: to.clone(),
                            body: rendered.chat.clone(),
                        })
                        .await;
                    (
                        DeliveryChannel::Whatsapp,
                        outcome,
                        rendered.chat.clone(),
                        None,
                        None,
                    )
                }
            };

            let status = if outcome.success {
                DeliveryStatus::Sent
            } else {
                DeliveryStatus::Failed
            };

            let receipt_input = CreateCommunicationReceipt {
                trip_id,
                person_type: passenger.person_type.clone(),
                person_id: passenger.person_id,
                channel: delivery_channel.as_str().to_string(),
                content_types: label.clone(),
                subject: receipt_subject,
                body_text,
                body_html,
                status: status.as_str().to_string(),
                transport_message_id: outcome.message_id.clone(),
                error_message: outcome.error.clone(),
            };

            match CommunicationRepo::create(pool, &receipt_input).await {
                Ok(receipt) => communications.push(receipt),
                Err(e) => {
                    tracing::error!(
                        passenger_id = passenger.id,
                        channel = delivery_channel.as_str(),
                        error = %e,
                        "Failed to record communication receipt"
                    );
                    errors.push(SendError {
                        channel: Some(delivery_channel.as_str().to_string()),
                        ..skip_error(passenger, format!("failed to record receipt: {e}"))
                    });
                }
            }

            if let Some(reason) = outcome.error {
                errors.push(SendError {
                    channel: Some(delivery_channel.as_str().to_string()),
                    ..skip_error(passenger, reason)
                });
            }
        }
    }

    let communications_sent = communications
        .iter()
        .filter(|receipt| receipt.status == DeliveryStatus::Sent.as_str())
        .count();

    tracing::info!(
        trip_id,
        communications_sent,
        errors = errors.len(),
        "Travel details send completed"
    );

    Ok(SendDetailsReport {
        communications_sent,
        errors: errors.len(),
        details: SendDetailsDetails {
            communications,
            errors,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn card(email: Option<&str>, phone: Option<&str>) -> ContactCard {
        ContactCard {
            display_name: "Ada Smith".into(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn both_with_email_only_plans_one_email_and_one_phone_error() {
        let (plans, errors) = plan_channels(Channel::Both, &card(Some("a@example.com"), None), None);

        assert_eq!(
            plans,
            vec![DeliveryPlan::Email {
                to: "a@example.com".into()
            }]
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, DeliveryChannel::Whatsapp);
        assert_eq!(errors[0].1, "no phone number available");
    }

    #[test]
    fn both_with_no_contacts_plans_nothing() {
        let (plans, errors) = plan_channels(Channel::Both, &card(None, None), None);
        assert!(plans.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].1, "no email address available");
        assert_eq!(errors[1].1, "no phone number available");
    }

    #[test]
    fn whatsapp_plan_normalizes_the_number() {
        let (plans, errors) = plan_channels(
            Channel::Whatsapp,
            &card(Some("ignored@example.com"), Some("07700 900123")),
            Some("44"),
        );

        assert!(errors.is_empty());
        assert_eq!(
            plans,
            vec![DeliveryPlan::Whatsapp {
                to: "+447700900123".into()
            }]
        );
    }

    #[test]
    fn email_only_ignores_missing_phone() {
        let (plans, errors) =
            plan_channels(Channel::Email, &card(Some("a@example.com"), None), None);
        assert_eq!(plans.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn digitless_phone_counts_as_missing() {
        let (plans, errors) = plan_channels(Channel::Whatsapp, &card(None, Some("n/a")), None);
        assert!(plans.is_empty());
        assert_eq!(errors[0].1, "no phone number available");
    }
}
