pub mod api_status;
pub mod auth;
pub mod booking_table;
pub mod category_picker;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod service_card;
pub mod service_grid;

pub use api_status::ApiStatusIndicator;
pub use booking_table::BookingTable;
pub use category_picker::CategoryPicker;
pub use navbar::Navbar;
pub use notifications::{NotificationStack, Notifications};
pub use page::Page;
pub use service_card::ServiceCard;
pub use service_grid::{ServiceGrid, ServiceGridState};
