mod auth;
mod bookings;
mod health;
