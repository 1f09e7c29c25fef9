use dioxus::prelude::*;

use crate::{client::components::service_card::ServiceIcon, model::service::ServiceType};

#[component]
pub fn CategoryPicker(selected: Option<ServiceType>, on_select: EventHandler<ServiceType>) -> Element {
    rsx!(
        ul { class: "grid gap-4 grid-cols-2 md:grid-cols-4",
            {ServiceType::BROWSABLE.into_iter().map(|service_type| {
                let border = if selected == Some(service_type) {
                    "border-primary"
                } else {
                    "border-base-300"
                };
                let label = service_type.label();

                rsx! {
                    li { key: "{service_type}",
                        button {
                            class: "card border-2 {border} w-full cursor-pointer",
                            r#type: "button",
                            onclick: move |_| on_select.call(service_type),
                            div { class: "card-body flex flex-row items-center gap-2",
                                ServiceIcon { service_type: service_type }
                                span { "{label}" }
                            }
                        }
                    }
                }
            })}
        }
    )
}
