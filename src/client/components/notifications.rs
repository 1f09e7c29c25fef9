use dioxus::prelude::*;

use crate::{
    client::notifier::Notifier,
    notification::{Notification, NotificationId},
};

/// Notification stack bound to the app's [`Notifier`].
#[component]
pub fn Notifications() -> Element {
    let notifier = use_context::<Notifier>();

    rsx!(NotificationStack {
        notifications: notifier.notifications(),
        on_close: move |id| notifier.dismiss(id),
    })
}

#[component]
pub fn NotificationStack(
    notifications: Vec<Notification>,
    on_close: EventHandler<NotificationId>,
) -> Element {
    rsx!(
        div {
            class: "toast toast-top toast-end z-[9999]",
            {notifications.into_iter().map(|notification| {
                let id = notification.id;
                let alert = notification.kind.alert_class();
                let faded = if notification.visible { "" } else { "faded" };

                rsx! {
                    div {
                        key: "{id}",
                        class: "alert {alert} {faded} shadow-md",
                        role: "alert",
                        span { "{notification.message}" }
                        button {
                            class: "btn btn-sm btn-ghost",
                            r#type: "button",
                            "aria-label": "Close",
                            onclick: move |_| on_close.call(id),
                            "✕"
                        }
                    }
                }
            })}
        }
    )
}
