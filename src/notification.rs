//! Transient, auto-dismissing messages.
//!
//! [`NotificationCenter`] holds the notifications currently on screen. Every
//! notification goes through the same lifecycle: pushed visible, faded after
//! [`NotificationTiming::display`], removed after [`NotificationTiming::fade`].
//! The timers themselves are driven by the client's `Notifier`.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
    Warning,
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Danger,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Danger => "alert-error",
            NotificationKind::Warning => "alert-warning",
            NotificationKind::Info => "alert-info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTiming {
    /// How long a notification stays fully visible.
    pub display: Duration,
    /// Length of the fade-out transition before removal.
    pub fade: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_secs(5),
            fade: Duration::from_millis(150),
        }
    }
}

impl NotificationTiming {
    /// Time from insertion until the notification is gone.
    pub fn lifetime(&self) -> Duration {
        self.display + self.fade
    }
}

pub type NotificationId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Cleared when the fade-out starts.
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: NotificationId,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        self.notifications.push(Notification {
            id,
            message: message.into(),
            kind,
            visible: true,
        });

        id
    }

    /// Start fading a notification out.
    ///
    /// Returns false if the notification was already dismissed.
    pub fn fade(&mut self, id: NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.visible = false;
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Message announced on page load from a query flag such as `?login=success`.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingNotice {
    pub message: &'static str,
    pub kind: NotificationKind,
}

const LANDING_FLAGS: [(&str, &str, NotificationKind); 3] = [
    (
        "login",
        "Login successful! Welcome back.",
        NotificationKind::Success,
    ),
    (
        "registered",
        "Registration successful! You can now log in.",
        NotificationKind::Success,
    ),
    (
        "logout",
        "You have been logged out successfully.",
        NotificationKind::Info,
    ),
];

impl LandingNotice {
    /// Notices requested by a URL query string, with or without leading `?`.
    pub fn from_query(query: &str) -> Vec<LandingNotice> {
        let pairs: Vec<(&str, &str)> = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();

        LANDING_FLAGS
            .iter()
            .filter(|(flag, _, _)| pairs.contains(&(*flag, "success")))
            .map(|&(_, message, kind)| LandingNotice { message, kind })
            .collect()
    }
}
