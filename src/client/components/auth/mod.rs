pub mod layout;

pub use layout::SessionLayout;
