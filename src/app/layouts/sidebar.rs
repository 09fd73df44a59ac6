use dioxus::prelude::*;

use crate::app::components::NavigationEntry;
use crate::navigation::{compose, compose_checked, ExportType, NavigationConfig, Role};

const DEFAULT_LOGO: &str = "/static/images/logo.png";

/// Fixed left sidebar: logo, the entries visible to this viewer, then the
/// user and about menus.
///
/// Composition runs on every render. A failing title producer is returned
/// through `?` to the nearest error boundary. Debug builds also reject
/// duplicate sibling titles, since they collide as rendering keys.
#[component]
pub fn Sidebar(
    config: NavigationConfig,
    role: Role,
    export_type: ExportType,
    user_menu: Element,
    about_menu: Element,
    #[props(default = DEFAULT_LOGO.to_string())] logo_src: String,
) -> Element {
    let items = if cfg!(debug_assertions) {
        compose_checked(&config.items, &role, &export_type)?
    } else {
        compose(&config.items, &role, &export_type)?
    };

    rsx! {
        div { class: "c-sidebar",
            div { class: "c-sidebar__column",
                nav { class: "c-sidebar__nav",
                    a { class: "c-sidebar__logo", href: "/",
                        img {
                            src: "{logo_src}",
                            alt: "Federation logo",
                            width: "36",
                            height: "36",
                        }
                    }
                    for item in items.iter() {
                        NavigationEntry { key: "{item.key}", item: item.clone() }
                    }
                }
                div { class: "c-sidebar__menus",
                    div { class: "c-sidebar__user-menu", {user_menu} }
                    {about_menu}
                }
            }
        }
    }
}
