//! Collapsible sidebar navigation.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaHouse, FaPersonWalking, FaUsers, FaXmark,
};
use dioxus_free_icons::Icon;

/// Top-level sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavSection {
    Home,
    Members,
    Visitors,
}

#[component]
pub fn Sidebar(active: NavSection, on_navigate: EventHandler<NavSection>) -> Element {
    let mut open = use_signal(|| true);

    let item_class = move |section: NavSection| {
        if section == active {
            "sidebar-item active"
        } else {
            "sidebar-item"
        }
    };

    rsx! {
        div {
            class: if open() { "sidebar open" } else { "sidebar" },

            button {
                class: "sidebar-toggle",
                onclick: move |_| open.toggle(),
                if open() {
                    Icon { icon: FaXmark, width: 20, height: 20 }
                } else {
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
            }

            nav {
                class: "sidebar-nav",
                button {
                    class: item_class(NavSection::Home),
                    onclick: move |_| on_navigate.call(NavSection::Home),
                    Icon { icon: FaHouse, width: 18, height: 18 }
                    if open() {
                        span { "Home" }
                    }
                }
                button {
                    class: item_class(NavSection::Members),
                    onclick: move |_| on_navigate.call(NavSection::Members),
                    Icon { icon: FaUsers, width: 18, height: 18 }
                    if open() {
                        span { "Membros" }
                    }
                }
                button {
                    class: item_class(NavSection::Visitors),
                    onclick: move |_| on_navigate.call(NavSection::Visitors),
                    Icon { icon: FaPersonWalking, width: 18, height: 18 }
                    if open() {
                        span { "Visitantes" }
                    }
                }
            }
        }
    }
}
