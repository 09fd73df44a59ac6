// Public API exports
pub mod domain;
pub mod navigation;
pub mod shared;

// Dioxus presentation (sidebar shell)
pub mod app;
