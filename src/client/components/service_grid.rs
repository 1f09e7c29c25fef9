use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

use crate::{
    client::components::ServiceCard,
    error::ApiError,
    model::service::{ServiceDto, ServiceType},
};

/// What the service grid currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceGridState {
    Loading,
    Empty(ServiceType),
    Loaded(Vec<ServiceDto>),
    Failed,
}

impl ServiceGridState {
    pub fn from_result(service_type: ServiceType, result: Result<Vec<ServiceDto>, ApiError>) -> Self {
        match result {
            Ok(services) if services.is_empty() => ServiceGridState::Empty(service_type),
            Ok(services) => ServiceGridState::Loaded(services),
            Err(_) => ServiceGridState::Failed,
        }
    }
}

#[component]
pub fn ServiceGrid(state: ServiceGridState) -> Element {
    match state {
        ServiceGridState::Loading => rsx!(
            div { class: "flex flex-col items-center py-12 gap-3",
                span { class: "loading loading-spinner loading-lg text-primary" }
                p { "Loading services..." }
            }
        ),
        ServiceGridState::Empty(service_type) => {
            let phrase = service_type.phrase();

            rsx!(
                div { class: "flex flex-col items-center py-12 gap-3",
                    p { "No {phrase} services available at this time." }
                    a {
                        href: "/register",
                        class: "btn btn-outline btn-primary",
                        "Become a Service Provider"
                    }
                }
            )
        }
        ServiceGridState::Loaded(services) => rsx!(
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                {services.into_iter().map(|service| rsx! {
                    ServiceCard { key: "{service.id}", service: service }
                })}
            }
        ),
        ServiceGridState::Failed => rsx!(
            div { class: "flex justify-center py-12",
                div { class: "alert alert-error max-w-xl",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaTriangleExclamation
                    }
                    span { "Error loading services. Please try again later." }
                }
            }
        ),
    }
}
