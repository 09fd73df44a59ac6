use dioxus::prelude::*;

use crate::navigation::NavigationItem;

/// One composed navigation entry, with its sub-menu if any
#[component]
pub fn NavigationEntry(item: NavigationItem) -> Element {
    rsx! {
        div { class: "c-nav-item",
            if let Some(href) = item.href.clone() {
                a { class: "c-nav-item__link", href: "{href}", title: "{item.title}",
                    {entry_label(&item)}
                }
            } else {
                span { class: "c-nav-item__link c-nav-item__link--static",
                    {entry_label(&item)}
                }
            }
            if !item.children.is_empty() {
                div { class: "c-nav-item__children",
                    for child in item.children.iter() {
                        NavigationEntry { key: "{child.key}", item: child.clone() }
                    }
                }
            }
        }
    }
}

fn entry_label(item: &NavigationItem) -> Element {
    rsx! {
        if let Some(icon) = item.icon.as_deref() {
            span { class: "c-nav-item__icon material-icons", "{icon}" }
        }
        span { class: "c-nav-item__title", "{item.title}" }
    }
}
