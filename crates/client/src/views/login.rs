//! Login page.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::auth::{self, AUTH};

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if email_value.is_empty() || password_value.is_empty() {
            AUTH.write()
                .failed("Email and password are required".to_string());
            return;
        }

        spawn(async move {
            if auth::login(email_value, password_value).await {
                nav.push(Route::GigFeed {});
            }
        });
    };

    let auth_state = AUTH.read();

    rsx! {
        div { class: "max-w-md mx-auto mt-12",
            div { class: "bg-slate-800 rounded-xl shadow-xl p-8",
                h1 { class: "text-2xl font-bold mb-6", "Welcome back" }
                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Email" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e: FormEvent| {
                                email.set(e.value());
                                AUTH.write().clear_error();
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Password" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e: FormEvent| {
                                password.set(e.value());
                                AUTH.write().clear_error();
                            },
                        }
                    }
                    if let Some(err) = auth_state.error.as_ref() {
                        div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                            "{err}"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-2.5 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: auth_state.loading,
                        if auth_state.loading { "Logging in..." } else { "Log in" }
                    }
                }
                p { class: "text-sm text-slate-400 mt-6 text-center",
                    "No account yet? "
                    Link {
                        to: Route::Register {},
                        class: "text-indigo-400 hover:text-indigo-300",
                        "Sign up"
                    }
                }
            }
        }
    }
}
