pub mod app;
pub mod components;
pub mod notifier;
pub mod router;
pub mod routes;
pub mod util;

pub use app::{App, AppGateway};
pub use notifier::Notifier;
