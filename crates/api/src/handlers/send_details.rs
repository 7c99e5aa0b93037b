//! Handlers for the travel-details send endpoint and the per-trip
//! communication history.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use maison_core::types::DbId;
use maison_db::repositories::CommunicationRepo;

use crate::error::AppResult;
use crate::handlers::trip::ensure_trip_exists;
use crate::itinerary::{self, SendDetailsRequest};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /trips/{trip_id}/send-details
// ---------------------------------------------------------------------------

/// Compose and deliver travel details to the selected passengers.
///
/// Validation failures abort with 400/404 and zero receipts; everything
/// after that is recovered per passenger and reported in the response.
pub async fn send_travel_details(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(body): Json<SendDetailsRequest>,
) -> AppResult<impl IntoResponse> {
    let report = itinerary::send_travel_details(
        &state.pool,
        state.transport.as_ref(),
        state.config.whatsapp_country_code.as_deref(),
        trip_id,
        &body,
    )
    .await?;

    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// GET /trips/{trip_id}/communications
// ---------------------------------------------------------------------------

/// List the delivery history of a trip, most recent first.
pub async fn list_communications(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_trip_exists(&state.pool, trip_id).await?;
    let items = CommunicationRepo::list_for_trip(&state.pool, trip_id).await?;
    tracing::debug!(count = items.len(), trip_id, "Listed communications");
    Ok(Json(DataResponse { data: items }))
}
