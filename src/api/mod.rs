//! Typed access to the marketplace backend.
//!
//! Every request goes through [`ApiGateway`]; the endpoint functions in the
//! submodules only build paths and payloads.

pub mod auth;
pub mod bookings;
pub mod gateway;
pub mod health;
pub mod navigator;
pub mod services;
pub mod transport;

pub use gateway::{ApiGateway, RequestOptions};
pub use navigator::Navigator;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(feature = "web")]
pub use navigator::BrowserNavigator;
#[cfg(feature = "web")]
pub use transport::ReqwasmTransport;
#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
