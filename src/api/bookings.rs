use serde_json::Value;

use crate::{
    api::{ApiGateway, Navigator, RequestOptions, Transport},
    error::ApiError,
    model::booking::{
        ActionOutcome, ActionResponseDto, BookingAction, BookingDto, BookingStatus,
        RejectBookingDto,
    },
    session::KeyValueStorage,
};

pub fn bookings_endpoint(status: Option<BookingStatus>) -> String {
    match status {
        Some(status) => format!("/bookings?status={}", status.as_str()),
        None => "/bookings".to_string(),
    }
}

/// Retrieve the bookings of the current user, or of their services for
/// providers.
pub async fn fetch_bookings<T, S, N>(
    gateway: &ApiGateway<T, S, N>,
    status: Option<BookingStatus>,
) -> Result<Vec<BookingDto>, ApiError>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    gateway.get_json(&bookings_endpoint(status)).await
}

/// Request a lifecycle transition of a booking.
///
/// Some endpoints answer 2xx with an `error` field; that counts as a rejection.
pub async fn perform_booking_action<T, S, N>(
    gateway: &ApiGateway<T, S, N>,
    booking_id: i64,
    action: &BookingAction,
) -> Result<ActionOutcome, ApiError>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    let mut options = RequestOptions::post();
    if let BookingAction::Reject { reason } = action {
        options = options.json(&RejectBookingDto {
            reason: reason.clone(),
        })?;
    }

    let value = gateway.request(&action.endpoint(booking_id), options).await?;
    let response = match value {
        Value::Null => ActionResponseDto::default(),
        value => serde_json::from_value::<ActionResponseDto>(value)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?,
    };

    if let Some(error) = response.error.filter(|e| !e.is_empty()) {
        return Err(ApiError::Rejected {
            status: 200,
            message: error,
        });
    }

    let message = response
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| action.kind().success_message().to_string());

    Ok(ActionOutcome { message })
}
