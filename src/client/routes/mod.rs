pub mod bookings;
pub mod home;
pub mod login;
pub mod not_found;

pub use bookings::Bookings;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
