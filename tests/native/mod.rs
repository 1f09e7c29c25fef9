//! End-to-end tests of the gateway over real HTTP.
//!
//! These run the reqwest transport against a mockito server to verify the
//! wire format: headers, query strings and JSON bodies.

use marketplace::{
    api::{
        auth::login, bookings::perform_booking_action, health::check_health,
        services::fetch_services, ApiGateway, ReqwestTransport,
    },
    config::ClientConfig,
    error::ApiError,
    model::{booking::BookingAction, service::ServiceType, session::Role},
    session::{MemoryStorage, SessionContext},
};
use marketplace_test_utils::{
    constant::{TEST_ACCESS_TOKEN, TEST_CSRF_TOKEN},
    fixtures::service::services_body,
    prelude::*,
};
use mockito::{Matcher, Server};
use serde_json::json;

type HttpGateway = ApiGateway<ReqwestTransport, MemoryStorage, RecordingNavigator>;

fn http_gateway(server_url: &str) -> HttpGateway {
    let config = ClientConfig::from_vars(Some(server_url), None)
        .unwrap()
        .with_csrf_token(Some(TEST_CSRF_TOKEN.to_string()));

    ApiGateway::new(
        ReqwestTransport::default(),
        SessionContext::new(MemoryStorage::default()),
        RecordingNavigator::default(),
        config,
    )
}

/// Tests the health probe over HTTP.
///
/// Expected: Ok with healthy status, endpoint hit once
#[tokio::test]
async fn health_over_http() -> Result<(), TestError> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "status": "healthy" }).to_string())
        .create_async()
        .await;

    let gateway = http_gateway(&server.url());
    let health = check_health(&gateway).await?;

    assert!(health.is_healthy());
    mock.assert_async().await;

    Ok(())
}

/// Tests the category filter on the wire.
///
/// Expected: query carries service_type and status=AVAILABLE
#[tokio::test]
async fn services_query_string() -> Result<(), TestError> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/api/services-ui".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("service_type".to_string(), "GYM_FITNESS".to_string()),
            Matcher::UrlEncoded("status".to_string(), "AVAILABLE".to_string()),
        ]))
        .with_status(200)
        .with_body(
            services_body(&[service::mock_service(4, ServiceType::GymFitness)]).to_string(),
        )
        .create_async()
        .await;

    let gateway = http_gateway(&server.url());
    let services = fetch_services(&gateway, ServiceType::GymFitness).await?;

    assert_eq!(services.len(), 1);
    mock.assert_async().await;

    Ok(())
}

/// Tests credential and CSRF headers on a booking action.
///
/// Expected: bearer token, CSRF token and JSON body reach the server
#[tokio::test]
async fn booking_action_headers() -> Result<(), TestError> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bookings/5/reject")
        .match_header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
        .match_header("x-csrf-token", TEST_CSRF_TOKEN)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "reason": "No slots left" })))
        .with_status(200)
        .with_body(json!({ "message": "Booking rejected" }).to_string())
        .create_async()
        .await;

    let gateway = http_gateway(&server.url());
    gateway.session().begin(&session::mock_session(Role::PowerUser))?;

    let action = BookingAction::Reject {
        reason: Some("No slots left".to_string()),
    };
    let outcome = perform_booking_action(&gateway, 5, &action).await?;

    assert_eq!(outcome.message, "Booking rejected");
    mock.assert_async().await;

    Ok(())
}

/// Tests that a 401 over HTTP ends the session.
///
/// Expected: Err(SessionExpired), session cleared, redirect to login
#[tokio::test]
async fn unauthorized_over_http() -> Result<(), TestError> {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/bookings")
        .with_status(401)
        .create_async()
        .await;

    let gateway = http_gateway(&server.url());
    gateway.session().begin(&session::mock_session(Role::User))?;

    let result = marketplace::api::bookings::fetch_bookings(&gateway, None).await;

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(gateway.session().current().is_none());
    assert_eq!(gateway.navigator().redirects(), vec!["/login".to_string()]);

    Ok(())
}

/// Tests a login round trip over HTTP.
///
/// Expected: Ok with the session the server issued
#[tokio::test]
async fn login_over_http() -> Result<(), TestError> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::PartialJson(json!({ "email": "jane@example.com" })))
        .with_status(200)
        .with_body(session::login_response(Role::Admin).to_string())
        .create_async()
        .await;

    let gateway = http_gateway(&server.url());
    let session = login(&gateway, "jane@example.com", "pw").await?;

    assert_eq!(session.role, Role::Admin);
    mock.assert_async().await;

    Ok(())
}

/// Tests that a closed port is a connectivity failure.
///
/// Expected: Err(Connectivity)
#[tokio::test]
async fn closed_port_is_connectivity_error() {
    let gateway = http_gateway("http://127.0.0.1:1");

    let result = check_health(&gateway).await;

    assert!(matches!(result, Err(ApiError::Connectivity(_))));
}
