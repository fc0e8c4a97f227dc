//! Post-a-gig form.

use dioxus::prelude::*;
use giglance_shared::CreateGigRequest;

use crate::components::Protected;
use crate::routes::Route;
use crate::stores::gigs::{self, GIGS};

#[component]
pub fn CreateGig() -> Element {
    rsx! {
        Protected {
            CreateGigForm {}
        }
    }
}

#[component]
fn CreateGigForm() -> Element {
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let title_value = title.read().trim().to_string();
        let description_value = description.read().trim().to_string();
        if title_value.is_empty() || description_value.is_empty() {
            form_error.set(Some("Title and description are required".to_string()));
            return;
        }
        let Ok(budget_value) = budget.read().trim().parse::<f64>() else {
            form_error.set(Some("Enter a valid budget".to_string()));
            return;
        };
        if budget_value <= 0.0 {
            form_error.set(Some("Budget must be greater than zero".to_string()));
            return;
        }
        form_error.set(None);

        spawn(async move {
            let created = gigs::create_gig(CreateGigRequest {
                title: title_value,
                description: description_value,
                budget: budget_value,
            })
            .await;
            if let Some(gig) = created {
                nav.push(Route::GigDetails { id: gig.id });
            }
        });
    };

    let state = GIGS.read();
    let error = form_error.read().clone().or_else(|| state.error.clone());

    rsx! {
        div { class: "max-w-xl mx-auto",
            div { class: "bg-slate-800 rounded-xl shadow-xl p-8",
                h1 { class: "text-2xl font-bold mb-6", "Post a gig" }
                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Title" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "text",
                            placeholder: "Design a logo for my startup",
                            value: "{title}",
                            oninput: move |e: FormEvent| {
                                title.set(e.value());
                                form_error.set(None);
                                GIGS.write().clear_error();
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Description" }
                        textarea {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors h-36 resize-none",
                            placeholder: "What needs doing, deliverables, timeline...",
                            value: "{description}",
                            oninput: move |e: FormEvent| {
                                description.set(e.value());
                                form_error.set(None);
                                GIGS.write().clear_error();
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-slate-300 mb-2", "Budget ($)" }
                        input {
                            class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                            r#type: "number",
                            min: "1",
                            step: "1",
                            placeholder: "500",
                            value: "{budget}",
                            oninput: move |e: FormEvent| {
                                budget.set(e.value());
                                form_error.set(None);
                                GIGS.write().clear_error();
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
                        class: "w-full py-2.5 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg font-medium transition-colors disabled:opacity-50",
                        disabled: state.loading,
                        if state.loading { "Posting..." } else { "Post gig" }
                    }
                }
            }
        }
    }
}
