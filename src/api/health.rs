use crate::{
    api::{ApiGateway, Navigator, Transport},
    error::ApiError,
    model::api::HealthDto,
    session::KeyValueStorage,
};

pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Retrieve the backend health report.
pub async fn check_health<T, S, N>(gateway: &ApiGateway<T, S, N>) -> Result<HealthDto, ApiError>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    gateway.get_json(HEALTH_ENDPOINT).await
}
