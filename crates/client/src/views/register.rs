//! Registration page.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::auth::{self, AUTH};

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    // Local validation errors, kept apart from server-side auth errors.
    let mut form_error = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let name_value = name.read().trim().to_string();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        let confirm_value = confirm.read().clone();

        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            form_error.set(Some("All fields are required".to_string()));
            return;
        }
        if password_value.len() < 6 {
            form_error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }
        if password_value != confirm_value {
            form_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        form_error.set(None);

        spawn(async move {
            if auth::register(name_value, email_value, password_value).await {
                nav.push(Route::GigFeed {});
            }
        });
    };

    let auth_state = AUTH.read();
    let error = form_error.read().clone().or_else(|| auth_state.error.clone());

    rsx! {
        div { class: "max-w-md mx-auto mt-12",
            div { class: "bg-slate-800 rounded-xl shadow-xl p-8",
                h1 { class: "text-2xl font-bold mb-6", "Create your account" }
                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Name" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "text",
                            placeholder: "Ada Lovelace",
                            value: "{name}",
                            oninput: move |e: FormEvent| {
                                name.set(e.value());
                                form_error.set(None);
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Email" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e: FormEvent| {
                                email.set(e.value());
                                form_error.set(None);
                                AUTH.write().clear_error();
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Password" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "password",
                            placeholder: "At least 6 characters",
                            value: "{password}",
                            oninput: move |e: FormEvent| {
                                password.set(e.value());
                                form_error.set(None);
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Confirm password" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "password",
                            value: "{confirm}",
                            oninput: move |e: FormEvent| {
                                confirm.set(e.value());
                                form_error.set(None);
                            },
                        }
                    }
                    if let Some(err) = error.as_ref() {
                        div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                            "{err}"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-2.5 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: auth_state.loading,
                        if auth_state.loading { "Creating account..." } else { "Sign up" }
                    }
                }
                p { class: "text-sm text-slate-400 mt-6 text-center",
                    "Already have an account? "
                    Link {
                        to: Route::Login {},
                        class: "text-indigo-400 hover:text-indigo-300",
                        "Log in"
                    }
                }
            }
        }
    }
}
