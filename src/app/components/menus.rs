use dioxus::prelude::*;

// Default menus for the sidebar footer. Hosts with real account and
// version information pass their own elements to `Sidebar`.

#[component]
pub fn UserMenu() -> Element {
    rsx! {
        a { class: "c-sidebar__menu-button", href: "/login/", title: "Account", "👤" }
    }
}

#[component]
pub fn AboutMenu() -> Element {
    rsx! {
        span {
            class: "c-sidebar__menu-button",
            title: concat!("Version ", env!("CARGO_PKG_VERSION")),
            "ℹ️"
        }
    }
}
