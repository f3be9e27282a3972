//! Visitor detail view.

use dioxus::prelude::*;
use ui::format::format_date_br;
use ui::icons::FaArrowLeft;
use ui::Icon;

use crate::Route;

#[component]
pub fn VisitorDetail(id: i64) -> Element {
    let nav = use_navigator();

    let record = use_resource(move || async move {
        match api::get_visitor(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("failed to load visitor {id}: {e}");
                None
            }
        }
    });

    let back = rsx! {
        button {
            class: "link-btn",
            onclick: move |_| { nav.push(Route::Visitors {}); },
            Icon { icon: FaArrowLeft, width: 16, height: 16 }
            span { "Voltar para lista de visitantes" }
        }
    };

    match record() {
        None => rsx! {
            div { class: "loading", "Carregando..." }
        },
        Some(None) => rsx! {
            div {
                class: "not-found",
                div { "Visitante não encontrado" }
                {back}
            }
        },
        Some(Some(visitor)) => rsx! {
            div { style: "margin-bottom: 1.5rem;", {back} }

            div {
                class: "detail-card",
                div {
                    class: "detail-header",
                    h1 { "Detalhes do Visitante" }
                }
                div {
                    class: "detail-body",
                    div {
                        class: "detail-section",
                        div {
                            class: "detail-field",
                            label { "Nome" }
                            p { "{visitor.name}" }
                        }
                        div {
                            class: "detail-field",
                            label { "Data da Visita" }
                            p { {format_date_br(&visitor.visit_date)} }
                        }
                    }
                }
            }
        },
    }
}
