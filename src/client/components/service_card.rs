use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBicycle, FaBriefcase, FaCar, FaDumbbell, FaHouse, FaUser, FaWrench,
};
use dioxus_free_icons::Icon;

use crate::model::service::{ServiceDto, ServiceType};

#[component]
pub fn ServiceIcon(service_type: ServiceType) -> Element {
    let class = format!("text-{}", service_type.accent());

    match service_type {
        ServiceType::CarPool => rsx!(Icon { class: class, width: 20, height: 20, icon: FaCar }),
        ServiceType::BikePool => rsx!(Icon { class: class, width: 20, height: 20, icon: FaBicycle }),
        ServiceType::GymFitness => rsx!(Icon { class: class, width: 20, height: 20, icon: FaDumbbell }),
        ServiceType::Household => rsx!(Icon { class: class, width: 20, height: 20, icon: FaHouse }),
        ServiceType::Mechanical => rsx!(Icon { class: class, width: 20, height: 20, icon: FaWrench }),
        ServiceType::Other => rsx!(Icon { class: class, width: 20, height: 20, icon: FaBriefcase }),
    }
}

#[component]
pub fn ServiceCard(service: ServiceDto) -> Element {
    let accent = service.service_type.accent();
    let price = service.price_label();
    let provider = service.provider_label().to_string();
    let href = service.details_href();

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm h-full",
            div {
                class: "card-body",
                div { class: "flex justify-between items-start gap-2",
                    div { class: "flex items-center gap-2",
                        ServiceIcon { service_type: service.service_type }
                        h3 { class: "card-title", "{service.name}" }
                    }
                    span { class: "badge badge-{accent}", "{price}" }
                }
                p { "{service.description}" }
                div { class: "card-actions",
                    a {
                        href: "{href}",
                        class: "btn btn-sm btn-outline btn-{accent} mt-2",
                        "View Details"
                    }
                }
            }
            div {
                class: "flex items-center gap-1 px-8 pb-4 text-sm opacity-70",
                Icon {
                    width: 14,
                    height: 14,
                    icon: FaUser
                }
                span { "{provider}" }
            }
        }
    )
}
