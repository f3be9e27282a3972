//! Authenticated application shell: auth gate, sidebar, header, content outlet.

use dioxus::prelude::*;
use ui::{use_auth, use_session, NavSection, Sidebar};

use super::Login;
use crate::Route;

const APP_CSS: &str = include_str!("../../assets/app.css");

/// Layout for every route. While the session is loading a splash screen is
/// shown; with no session the sign-in view replaces whatever route was
/// requested.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if auth().loading {
        return rsx! {
            style { {APP_CSS} }
            div { class: "screen-center", "Carregando..." }
        };
    }

    if auth().user.is_none() {
        return rsx! {
            style { {APP_CSS} }
            Login {}
        };
    }

    let active = match route {
        Route::Home {} => NavSection::Home,
        Route::Members {} | Route::MemberDetail { .. } => NavSection::Members,
        Route::Visitors {} | Route::VisitorDetail { .. } => NavSection::Visitors,
    };

    let on_navigate = move |section: NavSection| {
        let target = match section {
            NavSection::Home => Route::Home {},
            NavSection::Members => Route::Members {},
            NavSection::Visitors => Route::Visitors {},
        };
        nav.push(target);
    };

    let state = auth();
    let who = match (&state.profile, &state.user) {
        (Some(profile), _) => format!("{} ({})", profile.full_name, profile.role),
        (None, Some(user)) => user.email.clone(),
        (None, None) => String::new(),
    };

    rsx! {
        style { {APP_CSS} }

        div {
            class: "app-layout",

            Sidebar { active, on_navigate }

            div {
                class: "app-main",

                header {
                    class: "app-header",
                    h1 { "Semeando Família" }
                    div {
                        class: "app-header-user",
                        span { "{who}" }
                        button {
                            class: "logout-btn",
                            onclick: move |_| {
                                let session = session.clone();
                                async move { session.sign_out().await }
                            },
                            "Sair"
                        }
                    }
                }

                main {
                    class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
