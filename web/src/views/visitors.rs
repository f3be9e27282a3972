//! Visitor listing: searchable, paginated table.

use dioxus::prelude::*;
use ui::format::format_date_br;
use ui::icons::{FaEye, FaMagnifyingGlass};
use ui::{use_paged_query, Icon, Pagination};

use crate::Route;

#[component]
pub fn Visitors() -> Element {
    let nav = use_navigator();
    let mut list = use_paged_query(|page, search| api::list_visitors(page, search));

    let total_label = format!("Total: {} visitantes", list.total());

    rsx! {
        div {
            div {
                class: "page-header",
                h1 { "Visitantes" }
                span { class: "page-total", "{total_label}" }
            }

            div {
                class: "search-box",
                input {
                    r#type: "text",
                    placeholder: "Buscar por nome...",
                    value: list.search(),
                    oninput: move |evt| list.set_search(evt.value()),
                }
                span {
                    class: "search-icon",
                    Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
                }
            }

            if list.loading() {
                div { class: "loading", "Carregando..." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nome" }
                            th { "Data da Visita" }
                            th { "Ações" }
                        }
                    }
                    tbody {
                        for visitor in list.rows() {
                            tr {
                                key: "{visitor.id}",
                                td { class: "cell-name", "{visitor.name}" }
                                td { class: "cell-secondary", {format_date_br(&visitor.visit_date)} }
                                td {
                                    button {
                                        class: "link-btn",
                                        title: "Ver detalhes",
                                        onclick: {
                                            let id = visitor.id;
                                            move |_| { nav.push(Route::VisitorDetail { id }); }
                                        },
                                        Icon { icon: FaEye, width: 16, height: 16 }
                                        span { "Detalhes" }
                                    }
                                }
                            }
                        }
                    }
                }

                Pagination {
                    page: list.page(),
                    total: list.total(),
                    on_prev: move |_| list.prev_page(),
                    on_next: move |_| list.next_page(),
                }
            }
        }
    }
}
