use std::fmt;

use serde::{Deserialize, Serialize};

/// Category a provider lists a service under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    CarPool,
    BikePool,
    GymFitness,
    Household,
    Mechanical,
    /// A category this client does not know about yet.
    #[serde(other)]
    Other,
}

impl ServiceType {
    /// Categories offered in the browse picker. Bike pools are listed together
    /// with car pools by the backend.
    pub const BROWSABLE: [ServiceType; 4] = [
        ServiceType::CarPool,
        ServiceType::GymFitness,
        ServiceType::Household,
        ServiceType::Mechanical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::CarPool => "CAR_POOL",
            ServiceType::BikePool => "BIKE_POOL",
            ServiceType::GymFitness => "GYM_FITNESS",
            ServiceType::Household => "HOUSEHOLD",
            ServiceType::Mechanical => "MECHANICAL",
            ServiceType::Other => "OTHER",
        }
    }

    /// Heading shown above the service grid.
    pub fn title(&self) -> &'static str {
        match self {
            ServiceType::CarPool | ServiceType::BikePool => "Car & Bike Pool Services",
            ServiceType::GymFitness => "Gym & Fitness Services",
            ServiceType::Household => "Household Services",
            ServiceType::Mechanical => "Mechanical Services",
            ServiceType::Other => "Available Services",
        }
    }

    /// Short label for the category picker.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::CarPool => "Car Pool",
            ServiceType::BikePool => "Bike Pool",
            ServiceType::GymFitness => "Gym & Fitness",
            ServiceType::Household => "Household",
            ServiceType::Mechanical => "Mechanical",
            ServiceType::Other => "Other",
        }
    }

    /// Lowercase wording used in running text, e.g. `car pool`.
    pub fn phrase(&self) -> String {
        self.as_str().to_lowercase().replace('_', " ")
    }

    /// Accent color used for the card badge, icon and buttons.
    pub fn accent(&self) -> &'static str {
        match self {
            ServiceType::CarPool | ServiceType::BikePool => "primary",
            ServiceType::GymFitness => "success",
            ServiceType::Household => "info",
            ServiceType::Mechanical => "warning",
            ServiceType::Other => "neutral",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing status accepted by the `status` filter of the services endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Pending,
    Available,
    Unavailable,
    Deleted,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "PENDING",
            ServiceStatus::Available => "AVAILABLE",
            ServiceStatus::Unavailable => "UNAVAILABLE",
            ServiceStatus::Deleted => "DELETED",
        }
    }
}

/// A provider-offered bookable item as returned by `/api/services-ui`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub service_type: ServiceType,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub provider_name: Option<String>,
}

impl ServiceDto {
    /// Price formatted as rupees, or `Contact` when the provider set none.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) if price > 0.0 => format!("₹{:.2}", price),
            _ => "Contact".to_string(),
        }
    }

    pub fn provider_label(&self) -> &str {
        match self.provider_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Service Provider",
        }
    }

    pub fn details_href(&self) -> String {
        format!("/service/{}", self.id)
    }
}
