//! Home dashboard with record totals.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    let totals = use_resource(|| async move {
        match api::get_totals().await {
            Ok(totals) => Some(totals),
            Err(e) => {
                tracing::warn!("failed to load dashboard totals: {e}");
                None
            }
        }
    });

    let (members, visitors) = match totals() {
        Some(Some(t)) => (t.members.to_string(), t.visitors.to_string()),
        _ => ("-".to_string(), "-".to_string()),
    };

    rsx! {
        div {
            h2 { "Bem-vindo ao Sistema" }
            div {
                class: "cards",
                button {
                    class: "card",
                    onclick: move |_| { nav.push(Route::Members {}); },
                    h3 { "Membros" }
                    div { class: "card-value", "{members}" }
                }
                button {
                    class: "card",
                    onclick: move |_| { nav.push(Route::Visitors {}); },
                    h3 { "Visitantes" }
                    div { class: "card-value", "{visitors}" }
                }
            }
        }
    }
}
