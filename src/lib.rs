#![allow(non_snake_case)]

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod notification;
pub mod session;

#[cfg(feature = "web")]
pub mod client;
