use dioxus::prelude::*;

use crate::{
    api::auth::logout,
    client::{app::AppGateway, components::ApiStatusIndicator, router::Route},
    model::session::Role,
};

/// Navigation entries, chosen by the role of the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Services,
    Bookings,
    ProviderBookings,
    Admin,
    Login,
    Register,
    Logout,
}

pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    match role {
        None => vec![NavLink::Services, NavLink::Login, NavLink::Register],
        Some(Role::User) => vec![NavLink::Services, NavLink::Bookings, NavLink::Logout],
        Some(Role::PowerUser) => vec![
            NavLink::Services,
            NavLink::ProviderBookings,
            NavLink::Logout,
        ],
        Some(Role::Admin) => vec![
            NavLink::Services,
            NavLink::Bookings,
            NavLink::Admin,
            NavLink::Logout,
        ],
    }
}

#[component]
fn NavEntry(link: NavLink) -> Element {
    let gateway = use_context::<AppGateway>();

    match link {
        NavLink::Services => rsx!(
            Link { to: Route::Home {}, class: "btn btn-ghost", "Services" }
        ),
        NavLink::Bookings => rsx!(
            Link { to: Route::Bookings {}, class: "btn btn-ghost", "My Bookings" }
        ),
        NavLink::ProviderBookings => rsx!(
            Link { to: Route::Bookings {}, class: "btn btn-ghost", "Provider Bookings" }
        ),
        NavLink::Admin => rsx!(
            a { href: "/admin", class: "btn btn-ghost", "Admin" }
        ),
        NavLink::Login => rsx!(
            Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
        ),
        NavLink::Register => rsx!(
            a { href: "/register", class: "btn btn-outline", "Register" }
        ),
        NavLink::Logout => rsx!(
            button {
                class: "btn btn-outline",
                r#type: "button",
                onclick: move |_| logout(&gateway),
                "Logout"
            }
        ),
    }
}

#[component]
pub fn Navbar() -> Element {
    let gateway = use_context::<AppGateway>();
    let session = gateway.session().current();
    let links = nav_links(session.as_ref().map(|s| s.role));

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl", "Marketplace" }
                        p { class: "text-xs", "Local services" }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                ApiStatusIndicator {}
                if let Some(session) = &session {
                    span { class: "text-sm hidden md:inline", "Hi, {session.username}" }
                }
                {links.into_iter().map(|link| rsx! {
                    NavEntry { key: "{link:?}", link: link }
                })}
            }
        }

        Outlet::<Route> {}
    }
}
