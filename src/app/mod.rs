pub mod components;
pub mod layouts;

use dioxus::prelude::*;

use crate::app::components::{AboutMenu, UserMenu};
use crate::app::layouts::Sidebar;
use crate::navigation::{ExportType, NavigationConfig, Role};

/// Dashboard root with the stock operator navigation
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dashboard app initialized");
    });

    let config = use_hook(NavigationConfig::operator_default);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: asset!("/assets/dist/bundle.css")
        },
        div { class: "c-layout",
            ErrorBoundary {
                handle_error: |_errors: ErrorContext| rsx! {
                    div { class: "c-error",
                        span { class: "c-error__icon", "❌" }
                        p { class: "c-error__text", "Navigation unavailable" }
                    }
                },
                Sidebar {
                    config: config.clone(),
                    role: Role::new("admin"),
                    export_type: ExportType::new("posix"),
                    user_menu: rsx! { UserMenu {} },
                    about_menu: rsx! { AboutMenu {} },
                }
            }
        }
    }
}
