//! Sidebar navigation: configuration, visibility rules and composition

pub mod composer;
pub mod config;
pub mod types;

pub use composer::{compose, compose_checked, ensure_unique_titles, find_duplicate_titles};
pub use config::NavigationConfig;
pub use types::{
    ExportType, NavigationItem, NavigationItemConfig, Role, Title, TitleProducer, Visibility,
    VisibilityPredicate,
};
