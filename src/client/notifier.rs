use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::{
    client::util::time::sleep,
    notification::{
        Notification, NotificationCenter, NotificationId, NotificationKind, NotificationTiming,
    },
};

/// Handle for showing notifications, provided as context by the app root.
#[derive(Clone, Copy)]
pub struct Notifier {
    center: Signal<NotificationCenter>,
    timing: NotificationTiming,
}

impl Notifier {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            center: Signal::new(NotificationCenter::default()),
            timing,
        }
    }

    /// Show a message that fades out and removes itself once its display
    /// time has passed.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let mut center = self.center;
        let timing = self.timing;
        let id = center.write().push(message, kind);

        // Runs on the root scope so leaving the current view does not strand
        // the notification on screen.
        spawn_forever(async move {
            sleep(timing.display).await;
            if center.write().fade(id) {
                sleep(timing.fade).await;
                center.write().dismiss(id);
            }
        });

        id
    }

    pub fn dismiss(&self, id: NotificationId) {
        let mut center = self.center;
        center.write().dismiss(id);
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.center.read().iter().cloned().collect()
    }
}
