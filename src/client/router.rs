use dioxus::prelude::*;

use crate::client::{
    components::{auth::SessionLayout, Navbar},
    routes::{Bookings, Home, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

        #[layout(SessionLayout)]

        #[route("/bookings")]
        Bookings {},

        #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
