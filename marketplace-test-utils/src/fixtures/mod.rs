//! Factories for the records the API hands back.
//!
//! - `session` - logged-in sessions and login responses
//! - `service` - service listings
//! - `booking` - bookings in any lifecycle state

pub mod booking;
pub mod service;
pub mod session;
