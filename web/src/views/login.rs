//! Sign-in view with email/password form and dismissable inline error.

use dioxus::prelude::*;
use ui::use_session;

/// Sign-in view. Rendered by the shell whenever no session exists; on success
/// the session-change event flips the shell back to the requested route.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut registering = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Informe o email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Informe a senha".to_string()));
                return;
            }

            loading.set(true);
            let outcome = if registering() {
                session.register(e, p, full_name().trim().to_string()).await
            } else {
                session.sign_in(e, p).await
            };
            if let Err(message) = outcome {
                loading.set(false);
                // Server message shown verbatim.
                error.set(Some(message));
            }
        });
    };

    let title = if registering() { "Criar conta" } else { "Semeando Família" };
    let submit_label = if loading() {
        "Entrando..."
    } else if registering() {
        "Criar conta"
    } else {
        "Entrar"
    };

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "login-card",
                h2 { "{title}" }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,

                    if let Some(message) = error() {
                        div {
                            class: "login-error",
                            span { "{message}" }
                            button {
                                r#type: "button",
                                onclick: move |_| error.set(None),
                                "✕"
                            }
                        }
                    }

                    if registering() {
                        div {
                            label { r#for: "full_name", "Nome completo" }
                            input {
                                id: "full_name",
                                r#type: "text",
                                value: full_name(),
                                oninput: move |evt| full_name.set(evt.value()),
                            }
                        }
                    }

                    div {
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        label { r#for: "password", "Senha" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "login-submit",
                        r#type: "submit",
                        disabled: loading(),
                        "{submit_label}"
                    }
                }

                div {
                    class: "login-alt",
                    if registering() {
                        button {
                            onclick: move |_| {
                                registering.set(false);
                                error.set(None);
                            },
                            "Já tem uma conta? Entrar"
                        }
                    } else {
                        button {
                            onclick: move |_| {
                                registering.set(true);
                                error.set(None);
                            },
                            "Primeiro acesso? Criar conta"
                        }
                    }
                }
            }
        }
    }
}
