use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::services::fetch_services,
    client::{
        app::AppGateway,
        components::{CategoryPicker, Page, ServiceGrid, ServiceGridState},
    },
    model::service::ServiceType,
};

#[component]
pub fn Home() -> Element {
    let gateway = use_context::<AppGateway>();
    let mut selected = use_signal(|| None::<ServiceType>);

    let services = use_resource(move || {
        let gateway = gateway.clone();
        let service_type = selected();

        async move {
            let service_type = service_type?;
            let result = fetch_services(&gateway, service_type).await;
            if let Err(err) = &result {
                tracing::error!("Failed to load {} services: {}", service_type, err);
            }

            Some(ServiceGridState::from_result(service_type, result))
        }
    });

    let title = selected()
        .map(|service_type| service_type.title())
        .unwrap_or("Available Services");
    let grid = services.read().clone();

    rsx!(
        Title { "Local Services | Marketplace" }
        Meta {
            name: "description",
            content: "Book car pools, gyms, household help and mechanics from local providers."
        }
        Page { class: "flex flex-col",
            div { class: "flex flex-col gap-6",
                CategoryPicker {
                    selected: selected(),
                    on_select: move |service_type| selected.set(Some(service_type)),
                }
                h2 { class: "text-2xl", "{title}" }
                {match grid {
                    Some(Some(state)) => rsx!(ServiceGrid { state: state }),
                    Some(None) => rsx!(
                        p { class: "text-center py-12 opacity-70",
                            "Choose a category to browse services."
                        }
                    ),
                    None => rsx!(ServiceGrid { state: ServiceGridState::Loading }),
                }}
            }
        }
    )
}
