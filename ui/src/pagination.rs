//! Clamped prev/next pagination controls.

use api::query;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

/// Pagination bar. Hidden entirely when everything fits on one page.
/// "Anterior" is disabled on the first page and "Próxima" on the last.
#[component]
pub fn Pagination(
    page: u32,
    total: i64,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let pages = query::total_pages(total);
    if pages <= 1 {
        return rsx! {};
    }
    let label = format!("Página {} de {}", page + 1, pages);

    rsx! {
        div {
            class: "pagination",
            button {
                class: "pagination-btn",
                disabled: !query::has_prev(page),
                onclick: move |_| on_prev.call(()),
                Icon { icon: FaChevronLeft, width: 14, height: 14 }
                "Anterior"
            }
            span { class: "pagination-label", "{label}" }
            button {
                class: "pagination-btn",
                disabled: !query::has_next(page, total),
                onclick: move |_| on_next.call(()),
                "Próxima"
                Icon { icon: FaChevronRight, width: 14, height: 14 }
            }
        }
    }
}
