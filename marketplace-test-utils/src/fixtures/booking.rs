use chrono::NaiveDate;
use marketplace::model::booking::{BookingDto, BookingStatus};
use serde_json::Value;

/// Create a booking in the given state with default test values.
pub fn mock_booking(id: i64, status: BookingStatus) -> BookingDto {
    BookingDto {
        id,
        service_id: 1,
        status,
        amount: 500.0,
        quantity: Some(1),
        booking_time: NaiveDate::from_ymd_opt(2025, 3, 1).and_then(|d| d.and_hms_opt(10, 30, 0)),
        notes: None,
    }
}

/// Booking list body as returned by `GET /bookings`.
pub fn bookings_body(bookings: &[BookingDto]) -> Value {
    serde_json::to_value(bookings).unwrap_or(Value::Null)
}
