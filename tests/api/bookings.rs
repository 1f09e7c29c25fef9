//! Tests for fetch_bookings and perform_booking_action.
//!
//! This module verifies the booking list request and every lifecycle action:
//! endpoint and payload, success messages, and rejections reported both as
//! error statuses and as 2xx bodies carrying an `error` field.

use marketplace::{
    api::{
        bookings::{fetch_bookings, perform_booking_action},
        Method,
    },
    error::ApiError,
    model::{
        booking::{BookingAction, BookingStatus},
        session::Role,
    },
    session::ACCESS_TOKEN_KEY,
};
use marketplace_test_utils::{fixtures::booking::bookings_body, prelude::*};
use serde_json::{json, Value};

/// Tests fetching the current user's bookings.
///
/// Expected: Ok with the listed bookings, authenticated GET /bookings
#[tokio::test]
async fn fetches_bookings_with_token() -> Result<(), TestError> {
    let listed = vec![
        booking::mock_booking(1, BookingStatus::Pending),
        booking::mock_booking(2, BookingStatus::Completed),
    ];
    let test = TestBuilder::new()
        .with_session(Role::User)
        .with_json(200, &bookings_body(&listed))
        .build()?;

    let bookings = fetch_bookings(&test.gateway, None).await?;

    assert_eq!(bookings, listed);
    let request = test.transport().last_request().unwrap();
    assert_eq!(request.url, test.url("/bookings"));
    assert!(request.header("Authorization").is_some());

    Ok(())
}

/// Tests filtering the booking list by status.
///
/// Expected: status appended as query parameter
#[tokio::test]
async fn filters_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::PowerUser)
        .with_json(200, &json!([]))
        .build()?;

    fetch_bookings(&test.gateway, Some(BookingStatus::Confirmed)).await?;

    let request = test.transport().last_request().unwrap();
    assert_eq!(request.url, test.url("/bookings?status=CONFIRMED"));

    Ok(())
}

/// Tests that each action posts to its own endpoint.
///
/// Expected: POST /bookings/{id}/{segment} for every action
#[tokio::test]
async fn posts_to_action_endpoints() -> Result<(), TestError> {
    let cases = [
        (BookingAction::Pay, "/bookings/7/payment"),
        (BookingAction::Cancel, "/bookings/7/cancel"),
        (BookingAction::Complete, "/bookings/7/complete"),
        (BookingAction::Confirm, "/bookings/7/confirm"),
        (BookingAction::Reject { reason: None }, "/bookings/7/reject"),
    ];

    for (action, endpoint) in cases {
        let test = TestBuilder::new()
            .with_session(Role::Admin)
            .with_json(200, &json!({ "message": "done" }))
            .build()?;

        let outcome = perform_booking_action(&test.gateway, 7, &action).await?;

        assert_eq!(outcome.message, "done");
        let request = test.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, test.url(endpoint));
    }

    Ok(())
}

/// Tests that a reject carries the provider's reason.
///
/// Expected: body {"reason": "..."} on the reject request
#[tokio::test]
async fn reject_sends_reason() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::PowerUser)
        .with_json(200, &json!({ "message": "Booking rejected" }))
        .build()?;

    let action = BookingAction::Reject {
        reason: Some("Fully booked that day".to_string()),
    };
    perform_booking_action(&test.gateway, 3, &action).await?;

    let request = test.transport().last_request().unwrap();
    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "reason": "Fully booked that day" }));

    Ok(())
}

/// Tests that actions other than reject send no body.
///
/// Expected: request body is None
#[tokio::test]
async fn plain_actions_send_no_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::User)
        .with_json(200, &json!({ "message": "Booking cancelled" }))
        .build()?;

    perform_booking_action(&test.gateway, 3, &BookingAction::Cancel).await?;

    assert_eq!(test.transport().last_request().unwrap().body, None);

    Ok(())
}

/// Tests the fallback message when the server sends none.
///
/// Expected: Ok with the action's default success message
#[tokio::test]
async fn empty_success_uses_default_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::User)
        .with_response(200, "")
        .build()?;

    let outcome = perform_booking_action(&test.gateway, 1, &BookingAction::Pay).await?;

    assert_eq!(outcome.message, "Payment processed successfully!");

    Ok(())
}

/// Tests that a 2xx response carrying `error` is a rejection.
///
/// Expected: Err(Rejected) with the server's error text
#[tokio::test]
async fn success_status_with_error_field_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::User)
        .with_json(200, &json!({ "error": "Booking already paid" }))
        .build()?;

    let err = perform_booking_action(&test.gateway, 1, &BookingAction::Pay)
        .await
        .unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(err.user_message(), "Booking already paid");

    Ok(())
}

/// Tests that a refused transition reports the server's reason.
///
/// Expected: Err(Rejected) with status and message from the response
#[tokio::test]
async fn refused_transition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::PowerUser)
        .with_json(409, &json!({ "error": "Booking is not pending" }))
        .build()?;

    let result = perform_booking_action(&test.gateway, 1, &BookingAction::Confirm).await;

    assert_eq!(
        result,
        Err(ApiError::Rejected {
            status: 409,
            message: "Booking is not pending".to_string(),
        })
    );

    Ok(())
}

/// Tests that an expired token during an action ends the session.
///
/// Expected: Err(SessionExpired), token removed, redirect to login
#[tokio::test]
async fn expired_session_during_action() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session(Role::User)
        .with_json(401, &json!({}))
        .build()?;

    let result = perform_booking_action(&test.gateway, 1, &BookingAction::Cancel).await;

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(!test.storage().contains(ACCESS_TOKEN_KEY));
    assert_eq!(test.navigator().last_redirect().as_deref(), Some("/login"));

    Ok(())
}
