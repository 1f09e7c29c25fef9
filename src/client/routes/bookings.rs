use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::bookings::{fetch_bookings, perform_booking_action},
    client::{
        app::AppGateway,
        components::{BookingTable, Page},
        notifier::Notifier,
        util::{browser, time::sleep},
    },
    error::ApiError,
    model::{
        booking::{BookingAction, BookingActionKind},
        session::Role,
    },
    notification::NotificationKind,
};

/// Ask the user to confirm an action, collecting the reject reason if needed.
fn prepare_action(kind: BookingActionKind) -> Option<BookingAction> {
    if !browser::confirm(kind.confirm_prompt()) {
        return None;
    }

    let action = match kind {
        BookingActionKind::Pay => BookingAction::Pay,
        BookingActionKind::Cancel => BookingAction::Cancel,
        BookingActionKind::Complete => BookingAction::Complete,
        BookingActionKind::Confirm => BookingAction::Confirm,
        BookingActionKind::Reject => BookingAction::Reject {
            reason: browser::prompt("Please provide a reason for rejection (optional):"),
        },
    };

    Some(action)
}

/// Run an action and report its outcome. Returns whether the list changed.
async fn run_booking_action(
    gateway: &AppGateway,
    notifier: Notifier,
    booking_id: i64,
    action: BookingAction,
) -> bool {
    let kind = action.kind();
    notifier.notify(kind.pending_message(), NotificationKind::Info);

    match perform_booking_action(gateway, booking_id, &action).await {
        Ok(outcome) => {
            notifier.notify(outcome.message, NotificationKind::Success);
            true
        }
        // The browser is already on its way to the login view.
        Err(ApiError::SessionExpired) => false,
        Err(err @ ApiError::Rejected { .. }) => {
            notifier.notify(err.user_message(), NotificationKind::Danger);
            false
        }
        Err(err) => {
            tracing::error!("Booking {} {} failed: {}", booking_id, kind.segment(), err);
            notifier.notify(kind.failure_message(), NotificationKind::Danger);
            false
        }
    }
}

#[component]
pub fn Bookings() -> Element {
    let gateway = use_context::<AppGateway>();
    let notifier = use_context::<Notifier>();
    let mut refresh = use_signal(|| 0u32);

    let role = gateway.session().role().unwrap_or(Role::User);
    let refresh_delay = gateway.config().refresh_delay;

    let bookings = use_resource({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            // Subscribe so bumping the counter reloads the list.
            let _ = refresh();

            async move { fetch_bookings(&gateway, None).await }
        }
    });

    let on_action = move |(booking_id, kind): (i64, BookingActionKind)| {
        let Some(action) = prepare_action(kind) else {
            return;
        };

        let gateway = gateway.clone();
        spawn(async move {
            if run_booking_action(&gateway, notifier, booking_id, action).await {
                sleep(refresh_delay).await;
                *refresh.write() += 1;
            }
        });
    };

    let heading = if role.is_provider() && !role.is_customer() {
        "Provider Bookings"
    } else {
        "My Bookings"
    };

    rsx!(
        Title { "{heading} | Marketplace" }
        Page { class: "flex flex-col",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "{heading}" }
                    {match &*bookings.read() {
                        None => rsx!(
                            div { class: "flex justify-center py-8",
                                span { class: "loading loading-spinner loading-lg" }
                            }
                        ),
                        Some(Ok(list)) if list.is_empty() => rsx!(
                            p { class: "py-8 text-center opacity-70", "You have no bookings yet." }
                        ),
                        Some(Ok(list)) => rsx!(
                            BookingTable {
                                bookings: list.clone(),
                                role: role,
                                on_action: on_action,
                            }
                        ),
                        Some(Err(err)) => {
                            tracing::error!("Failed to load bookings: {}", err);

                            rsx!(
                                div { class: "alert alert-error",
                                    "Error loading bookings. Please try again later."
                                }
                            )
                        }
                    }}
                }
            }
        }
    )
}
