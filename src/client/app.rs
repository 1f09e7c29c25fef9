use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::{ApiGateway, BrowserNavigator, ReqwasmTransport},
    client::{components::Notifications, notifier::Notifier, router::Route, util::browser},
    config::ClientConfig,
    session::{BrowserStorage, SessionContext},
};

/// Gateway used by every view of the browser client.
pub type AppGateway = ApiGateway<ReqwasmTransport, BrowserStorage, BrowserNavigator>;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);

    let notifier = use_context_provider(|| Notifier::new(config.notification));
    use_context_provider(|| {
        AppGateway::new(
            ReqwasmTransport,
            SessionContext::new(BrowserStorage::local()),
            BrowserNavigator,
            config.clone(),
        )
    });

    use_hook(move || {
        for notice in browser::take_landing_notices() {
            notifier.notify(notice.message, notice.kind);
        }
    });

    rsx!(
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
        Notifications {}
    )
}

fn load_config() -> ClientConfig {
    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid build configuration, falling back to defaults: {}", e);
        ClientConfig::default()
    });

    config.with_csrf_token(browser::csrf_token())
}
