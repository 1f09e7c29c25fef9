use marketplace::model::service::{ServiceDto, ServiceType};
use serde_json::Value;

/// Create a priced listing of the given category.
pub fn mock_service(id: i64, service_type: ServiceType) -> ServiceDto {
    ServiceDto {
        id,
        name: format!("{} #{}", service_type.label(), id),
        description: "A service offered for testing".to_string(),
        service_type,
        price: Some(250.0),
        provider_name: Some("Test Provider".to_string()),
    }
}

/// Listing body as returned by `/api/services-ui`.
pub fn services_body(services: &[ServiceDto]) -> Value {
    serde_json::to_value(services).unwrap_or(Value::Null)
}
