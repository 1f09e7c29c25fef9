pub mod api;
pub mod booking;
pub mod service;
pub mod session;
