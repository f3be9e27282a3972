//! Member detail view.

use dioxus::prelude::*;
use ui::format::{format_date_br, format_opt_date_br, or_dash, status_class};
use ui::icons::FaArrowLeft;
use ui::Icon;

use crate::Route;

/// Fetches one member by id. Zero rows and a failed query both land on the
/// "not found" rendering; the failure is logged so the two remain
/// distinguishable in the server logs.
#[component]
pub fn MemberDetail(id: i64) -> Element {
    let nav = use_navigator();

    let record = use_resource(move || async move {
        match api::get_member(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("failed to load member {id}: {e}");
                None
            }
        }
    });

    let back = rsx! {
        button {
            class: "link-btn",
            onclick: move |_| { nav.push(Route::Members {}); },
            Icon { icon: FaArrowLeft, width: 16, height: 16 }
            span { "Voltar para lista de membros" }
        }
    };

    match record() {
        None => rsx! {
            div { class: "loading", "Carregando..." }
        },
        Some(None) => rsx! {
            div {
                class: "not-found",
                div { "Membro não encontrado" }
                {back}
            }
        },
        Some(Some(member)) => {
            let baptized = if member.baptized { "Sim" } else { "Não" };
            rsx! {
                div { style: "margin-bottom: 1.5rem;", {back} }

                div {
                    class: "detail-card",
                    div {
                        class: "detail-header",
                        h1 { "{member.name}" }
                        span { class: status_class(&member.status), "{member.status}" }
                    }

                    div {
                        class: "detail-body",

                        div {
                            class: "detail-section",
                            h2 { "Informações Pessoais" }
                            div {
                                class: "detail-field",
                                label { "Email" }
                                p { {or_dash(member.email.as_deref()).to_string()} }
                            }
                            div {
                                class: "detail-field",
                                label { "Telefone" }
                                p { {or_dash(member.phone.as_deref()).to_string()} }
                            }
                            div {
                                class: "detail-field",
                                label { "Data de Nascimento" }
                                p { {format_opt_date_br(member.birth_date.as_deref())} }
                            }
                            div {
                                class: "detail-field",
                                label { "Estado Civil" }
                                p { {or_dash(member.marital_status.as_deref()).to_string()} }
                            }
                            div {
                                class: "detail-field",
                                label { "Profissão" }
                                p { {or_dash(member.profession.as_deref()).to_string()} }
                            }
                        }

                        div {
                            class: "detail-section",
                            h2 { "Informações Eclesiásticas" }
                            div {
                                class: "detail-field",
                                label { "Batizado" }
                                p { "{baptized}" }
                            }
                            if member.baptized {
                                div {
                                    class: "detail-field",
                                    label { "Data do Batismo" }
                                    p { {format_opt_date_br(member.baptism_date.as_deref())} }
                                }
                            }
                            div {
                                class: "detail-field",
                                label { "Data de Cadastro" }
                                p { {format_date_br(&member.created_at)} }
                            }
                        }

                        if let Some(address) = member.address.as_deref().filter(|a| !a.trim().is_empty()) {
                            div {
                                class: "detail-section",
                                h2 { "Endereço" }
                                div {
                                    class: "detail-field",
                                    p { "{address}" }
                                }
                            }
                        }

                        if let Some(notes) = member.notes.as_deref().filter(|n| !n.trim().is_empty()) {
                            div {
                                class: "detail-section",
                                h2 { "Observações" }
                                div {
                                    class: "detail-field",
                                    p { "{notes}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
