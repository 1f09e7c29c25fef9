//! Tests for check_health.

use marketplace::{api::health::check_health, error::ApiError};
use marketplace_test_utils::prelude::*;
use serde_json::json;

/// Tests reading a healthy report.
///
/// Expected: Ok with a healthy status, GET to /api/health
#[tokio::test]
async fn reports_healthy_backend() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(200, &json!({ "status": "healthy" }))
        .build()?;

    let health = check_health(&test.gateway).await?;

    assert!(health.is_healthy());
    let request = test.transport().last_request().unwrap();
    assert_eq!(request.url, test.url("/api/health"));

    Ok(())
}

/// Tests that a degraded report is a successful call with an unhealthy status.
///
/// Expected: Ok with is_healthy() false
#[tokio::test]
async fn degraded_backend_is_not_healthy() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(200, &json!({ "status": "degraded" }))
        .build()?;

    let health = check_health(&test.gateway).await?;

    assert!(!health.is_healthy());

    Ok(())
}

/// Tests that an unreachable backend surfaces as a connectivity error.
///
/// Expected: Err(Connectivity)
#[tokio::test]
async fn unreachable_backend() -> Result<(), TestError> {
    let test = TestBuilder::new().with_failure("offline").build()?;

    let result = check_health(&test.gateway).await;

    assert!(matches!(result, Err(ApiError::Connectivity(_))));

    Ok(())
}
