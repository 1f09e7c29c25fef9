use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Rejected,
    /// A status this client does not know; offers no actions.
    #[serde(other)]
    Other,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Other => "OTHER",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "badge-warning",
            BookingStatus::Confirmed => "badge-info",
            BookingStatus::Completed => "badge-success",
            BookingStatus::Cancelled | BookingStatus::Rejected => "badge-error",
            BookingStatus::Other => "badge-ghost",
        }
    }

    /// Lifecycle transitions the given role may request from this status.
    ///
    /// Customers pay for and cancel their bookings, providers confirm, reject
    /// and complete them. Admins can do both.
    pub fn available_actions(&self, role: Role) -> Vec<BookingActionKind> {
        let mut actions = Vec::new();

        if role.is_customer() {
            if *self == BookingStatus::Pending {
                actions.push(BookingActionKind::Pay);
            }
            if matches!(self, BookingStatus::Pending | BookingStatus::Confirmed) {
                actions.push(BookingActionKind::Cancel);
            }
        }

        if role.is_provider() {
            match self {
                BookingStatus::Pending => {
                    actions.push(BookingActionKind::Confirm);
                    actions.push(BookingActionKind::Reject);
                }
                BookingStatus::Confirmed => actions.push(BookingActionKind::Complete),
                _ => (),
            }
        }

        actions
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: i64,
    pub service_id: i64,
    pub status: BookingStatus,
    pub amount: f64,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub booking_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingDto {
    /// Review form of the booked service, offered once the booking is completed.
    pub fn review_href(&self) -> Option<String> {
        (self.status == BookingStatus::Completed)
            .then(|| format!("/service/{}#review-form", self.service_id))
    }
}

/// A state-transition request against an existing booking, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingActionKind {
    Pay,
    Cancel,
    Complete,
    Confirm,
    Reject,
}

impl BookingActionKind {
    /// Trailing path segment of `POST /bookings/{id}/...`
    pub fn segment(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "payment",
            BookingActionKind::Cancel => "cancel",
            BookingActionKind::Complete => "complete",
            BookingActionKind::Confirm => "confirm",
            BookingActionKind::Reject => "reject",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "Pay",
            BookingActionKind::Cancel => "Cancel",
            BookingActionKind::Complete => "Complete",
            BookingActionKind::Confirm => "Confirm",
            BookingActionKind::Reject => "Reject",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            BookingActionKind::Pay | BookingActionKind::Confirm => "btn-success",
            BookingActionKind::Complete => "btn-primary",
            BookingActionKind::Cancel | BookingActionKind::Reject => "btn-error",
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "Are you sure you want to process payment for this booking?",
            BookingActionKind::Cancel => "Are you sure you want to cancel this booking?",
            BookingActionKind::Complete => "Are you sure you want to mark this booking as completed?",
            BookingActionKind::Confirm => "Are you sure you want to confirm this booking?",
            BookingActionKind::Reject => "Are you sure you want to reject this booking?",
        }
    }

    /// Announced while the request is in flight.
    pub fn pending_message(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "Processing payment...",
            BookingActionKind::Cancel => "Cancelling booking...",
            BookingActionKind::Complete => "Completing booking...",
            BookingActionKind::Confirm => "Confirming booking...",
            BookingActionKind::Reject => "Rejecting booking...",
        }
    }

    /// Shown on success when the server sends no message of its own.
    pub fn success_message(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "Payment processed successfully!",
            BookingActionKind::Cancel => "Booking cancelled successfully!",
            BookingActionKind::Complete => "Booking marked as completed!",
            BookingActionKind::Confirm => "Booking confirmed successfully!",
            BookingActionKind::Reject => "Booking rejected successfully!",
        }
    }

    /// Shown when the server could not be reached or answered garbage.
    pub fn failure_message(&self) -> &'static str {
        match self {
            BookingActionKind::Pay => "Error processing payment. Please try again.",
            BookingActionKind::Cancel => "Error cancelling booking. Please try again.",
            BookingActionKind::Complete => "Error completing booking. Please try again.",
            BookingActionKind::Confirm => "Error confirming booking. Please try again.",
            BookingActionKind::Reject => "Error rejecting booking. Please try again.",
        }
    }
}

/// A booking action together with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingAction {
    Pay,
    Cancel,
    Complete,
    Confirm,
    Reject { reason: Option<String> },
}

impl BookingAction {
    pub fn kind(&self) -> BookingActionKind {
        match self {
            BookingAction::Pay => BookingActionKind::Pay,
            BookingAction::Cancel => BookingActionKind::Cancel,
            BookingAction::Complete => BookingActionKind::Complete,
            BookingAction::Confirm => BookingActionKind::Confirm,
            BookingAction::Reject { .. } => BookingActionKind::Reject,
        }
    }

    pub fn endpoint(&self, booking_id: i64) -> String {
        format!("/bookings/{}/{}", booking_id, self.kind().segment())
    }
}

/// Body of `POST /bookings/{id}/reject`
#[derive(Debug, Serialize, Deserialize)]
pub struct RejectBookingDto {
    pub reason: Option<String>,
}

/// Body answered by the booking action endpoints.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ActionResponseDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a booking action that the server accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    pub message: String,
}
