use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::health::check_health,
    client::{app::AppGateway, notifier::Notifier},
    error::ApiError,
    model::api::HealthDto,
    notification::NotificationKind,
};

#[derive(Clone, Debug, PartialEq)]
pub enum ApiStatus {
    Unknown,
    Healthy,
    Unhealthy(String),
    Unreachable,
}

impl ApiStatus {
    pub fn from_result(result: &Result<HealthDto, ApiError>) -> Self {
        match result {
            Ok(health) if health.is_healthy() => ApiStatus::Healthy,
            Ok(health) => ApiStatus::Unhealthy(health.status.clone()),
            Err(ApiError::Connectivity(_)) => ApiStatus::Unreachable,
            Err(err) => ApiStatus::Unhealthy(err.user_message()),
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "bg-warning",
            ApiStatus::Healthy => "bg-success",
            ApiStatus::Unhealthy(_) | ApiStatus::Unreachable => "bg-error",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "Checking API status",
            ApiStatus::Healthy => "API is healthy",
            ApiStatus::Unhealthy(_) => "API is not healthy",
            ApiStatus::Unreachable => "Could not connect to API",
        }
    }

    /// Notification shown when the user asks for the status explicitly.
    pub fn announcement(&self) -> Option<(String, NotificationKind)> {
        match self {
            ApiStatus::Unknown => None,
            ApiStatus::Healthy => {
                Some(("API Status: Healthy".to_string(), NotificationKind::Success))
            }
            ApiStatus::Unhealthy(status) => {
                Some((format!("API Status: {}", status), NotificationKind::Danger))
            }
            ApiStatus::Unreachable => Some((
                "Could not connect to API".to_string(),
                NotificationKind::Danger,
            )),
        }
    }
}

async fn probe_health(
    gateway: AppGateway,
    notifier: Notifier,
    mut status: Signal<ApiStatus>,
    announce: bool,
) {
    let result = check_health(&gateway).await;
    if let Err(err) = &result {
        tracing::error!("Health check failed: {}", err);
    }

    let current = ApiStatus::from_result(&result);
    if announce {
        if let Some((message, kind)) = current.announcement() {
            notifier.notify(message, kind);
        }
    }
    status.set(current);
}

/// Colored dot reflecting `/api/health`; clicking it checks again.
#[component]
pub fn ApiStatusIndicator() -> Element {
    let gateway = use_context::<AppGateway>();
    let notifier = use_context::<Notifier>();
    let status = use_signal(|| ApiStatus::Unknown);

    let on_mount = gateway.clone();
    use_hook(move || spawn(probe_health(on_mount, notifier, status, false)));

    let dot = status.read().dot_class();
    let title = status.read().title();

    rsx!(
        button {
            class: "btn btn-ghost btn-sm",
            r#type: "button",
            title: "{title}",
            onclick: move |_| {
                spawn(probe_health(gateway.clone(), notifier, status, true));
            },
            span { class: "api-status {dot}" }
            span { class: "text-xs", "API" }
        }
    )
}
