use dioxus::prelude::*;

use crate::client::{app::AppGateway, components::Page, router::Route};

/// Renders nested routes only while a session exists.
#[component]
pub fn SessionLayout() -> Element {
    let gateway = use_context::<AppGateway>();

    if gateway.session().current().is_some() {
        return rsx!(Outlet::<Route> {});
    }

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 py-16",
                p { "Please log in to see your bookings." }
                Link {
                    to: Route::Login {},
                    class: "btn btn-primary w-28",
                    "Login"
                }
            }
        }
    )
}
