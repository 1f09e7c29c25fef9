use dioxus::prelude::*;

use crate::{
    client::util::time::format_relative_time,
    model::{
        booking::{BookingActionKind, BookingDto},
        session::Role,
    },
};

#[component]
pub fn BookingTable(
    bookings: Vec<BookingDto>,
    role: Role,
    on_action: EventHandler<(i64, BookingActionKind)>,
) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Booking" }
                        th { "Service" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Booked" }
                        th { "Actions" }
                    }
                }
                tbody {
                    {bookings.into_iter().map(|booking| {
                        let id = booking.id;
                        let amount = format!("₹{:.2}", booking.amount);
                        let status = booking.status.as_str();
                        let badge = booking.status.badge();
                        let booked = booking
                            .booking_time
                            .as_ref()
                            .map(format_relative_time)
                            .unwrap_or_default();
                        let actions = booking.status.available_actions(role);
                        let review = booking.review_href().filter(|_| role.is_customer());

                        rsx! {
                            tr { key: "{id}",
                                td { "#{id}" }
                                td { "#{booking.service_id}" }
                                td { "{amount}" }
                                td {
                                    span { class: "badge {badge}", "{status}" }
                                }
                                td { "{booked}" }
                                td {
                                    div { class: "flex flex-wrap gap-2",
                                        {actions.into_iter().map(|kind| {
                                            let class = kind.button_class();
                                            let label = kind.label();

                                            rsx! {
                                                button {
                                                    key: "{label}",
                                                    class: "btn btn-xs {class}",
                                                    r#type: "button",
                                                    onclick: move |_| on_action.call((id, kind)),
                                                    "{label}"
                                                }
                                            }
                                        })}
                                        if let Some(href) = review {
                                            a {
                                                class: "btn btn-xs btn-outline",
                                                href: "{href}",
                                                "Review"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    })}
                }
            }
        }
    )
}
