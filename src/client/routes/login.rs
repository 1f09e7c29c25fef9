use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::{
        auth::{login, LOGIN_REDIRECT},
        Navigator,
    },
    client::{app::AppGateway, components::Page, notifier::Notifier},
    notification::NotificationKind,
};

#[component]
pub fn Login() -> Element {
    let gateway = use_context::<AppGateway>();
    let notifier = use_context::<Notifier>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let gateway = gateway.clone();
        spawn(async move {
            match login(&gateway, &email(), &password()).await {
                Ok(_) => gateway.navigator().redirect(LOGIN_REDIRECT),
                Err(err) => {
                    tracing::warn!("Login failed: {}", err);
                    notifier.notify(err.user_message(), NotificationKind::Danger);
                    submitting.set(false);
                }
            }
        });
    };

    rsx!(
        Title { "Login | Marketplace" }
        Page { class: "flex items-center justify-center",
            form {
                class: "card bg-base-100 shadow-sm w-full max-w-96 mx-auto",
                onsubmit: onsubmit,
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Login" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Login"
                    }
                    p { class: "text-sm",
                        "No account yet? "
                        a { href: "/register", class: "link", "Register" }
                    }
                }
            }
        }
    )
}
