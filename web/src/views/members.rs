//! Member listing: searchable, paginated table.

use dioxus::prelude::*;
use ui::format::{format_date_br, or_dash, status_class};
use ui::icons::{FaEye, FaMagnifyingGlass};
use ui::{use_paged_query, Icon, Pagination};

use crate::Route;

#[component]
pub fn Members() -> Element {
    let nav = use_navigator();
    let mut list = use_paged_query(|page, search| api::list_members(page, search));

    let total_label = format!("Total: {} membros", list.total());

    rsx! {
        div {
            div {
                class: "page-header",
                h1 { "Membros" }
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
                            th { "Email" }
                            th { "Telefone" }
                            th { "Status" }
                            th { "Data de Cadastro" }
                            th { "Ações" }
                        }
                    }
                    tbody {
                        for member in list.rows() {
                            tr {
                                key: "{member.id}",
                                td { class: "cell-name", "{member.name}" }
                                td { class: "cell-secondary", {or_dash(member.email.as_deref()).to_string()} }
                                td { class: "cell-secondary", {or_dash(member.phone.as_deref()).to_string()} }
                                td {
                                    span { class: status_class(&member.status), "{member.status}" }
                                }
                                td { class: "cell-secondary", {format_date_br(&member.created_at)} }
                                td {
                                    button {
                                        class: "link-btn",
                                        title: "Ver detalhes",
                                        onclick: {
                                            let id = member.id;
                                            move |_| { nav.push(Route::MemberDetail { id }); }
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
