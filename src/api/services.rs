use crate::{
    api::{ApiGateway, Navigator, Transport},
    error::ApiError,
    model::service::{ServiceDto, ServiceStatus, ServiceType},
    session::KeyValueStorage,
};

pub fn services_endpoint(service_type: ServiceType, status: ServiceStatus) -> String {
    format!(
        "/api/services-ui?service_type={}&status={}",
        service_type.as_str(),
        status.as_str()
    )
}

/// Retrieve the available services of one category.
pub async fn fetch_services<T, S, N>(
    gateway: &ApiGateway<T, S, N>,
    service_type: ServiceType,
) -> Result<Vec<ServiceDto>, ApiError>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    gateway
        .get_json(&services_endpoint(service_type, ServiceStatus::Available))
        .await
}
