pub mod menus;
pub mod navigation_entry;

pub use menus::{AboutMenu, UserMenu};
pub use navigation_entry::NavigationEntry;
