//! Public gig feed with search and status filtering.

use dioxus::prelude::*;
use giglance_shared::{Gig, GigStatus};

use crate::routes::Route;
use crate::stores::gigs::{self, GIGS};

#[component]
pub fn GigFeed() -> Element {
    // Draft is what the input holds; `search` only moves on submit so we do
    // not hit the server on every keystroke.
    let mut draft = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut status = use_signal(String::new);

    use_effect(move || {
        let search_value = search();
        let status_value = status();
        spawn(async move {
            gigs::fetch_gigs(&search_value, &status_value).await;
        });
    });

    let state = GIGS.read();

    rsx! {
        div {
            div { class: "flex flex-col sm:flex-row gap-3 mb-8",
                form {
                    class: "flex-1 flex gap-2",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        search.set(draft.read().trim().to_string());
                    },
                    input {
                        class: "flex-1 bg-slate-800 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                        r#type: "text",
                        placeholder: "Search gigs...",
                        value: "{draft}",
                        oninput: move |e: FormEvent| draft.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2.5 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors",
                        "Search"
                    }
                }
                select {
                    class: "bg-slate-800 border border-slate-700 rounded-lg px-4 py-2.5 text-white focus:outline-none focus:border-indigo-500",
                    value: "{status}",
                    onchange: move |e: FormEvent| status.set(e.value()),
                    option { value: "", "All statuses" }
                    option { value: "open", "Open" }
                    option { value: "in_progress", "In progress" }
                    option { value: "completed", "Completed" }
                    option { value: "cancelled", "Cancelled" }
                }
            }

            if let Some(err) = state.error.as_ref() {
                div { class: "p-3 mb-6 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                    "{err}"
                }
            }

            if state.loading && state.gigs.is_empty() {
                div { class: "text-center py-20 text-slate-400", "Loading gigs..." }
            } else if state.gigs.is_empty() {
                div { class: "text-center py-20 text-slate-400",
                    p { class: "text-lg", "No gigs found" }
                    p { class: "text-sm mt-2", "Try a different search or check back later." }
                }
            } else {
                div { class: "grid gap-4 sm:grid-cols-2",
                    for gig in state.gigs.iter() {
                        GigCard { key: "{gig.id}", gig: gig.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn GigCard(gig: Gig) -> Element {
    let posted = gig.created_at.format("%b %e, %Y").to_string();
    let excerpt = if gig.description.chars().count() > 140 {
        let cut: String = gig.description.chars().take(140).collect();
        format!("{cut}...")
    } else {
        gig.description.clone()
    };

    rsx! {
        Link {
            to: Route::GigDetails { id: gig.id.clone() },
            class: "block bg-slate-800 rounded-xl p-5 hover:bg-slate-700/80 transition-colors",
            div { class: "flex items-start justify-between gap-3 mb-2",
                h2 { class: "font-semibold text-lg", "{gig.title}" }
                StatusChip { status: gig.status }
            }
            p { class: "text-sm text-slate-400 mb-4", "{excerpt}" }
            div { class: "flex items-center justify-between text-sm",
                span { class: "text-emerald-400 font-semibold", "${gig.budget}" }
                span { class: "text-slate-500", "Posted {posted}" }
            }
        }
    }
}

#[component]
pub fn StatusChip(status: GigStatus) -> Element {
    let classes = match status {
        GigStatus::Open => "bg-emerald-500/15 text-emerald-400",
        GigStatus::InProgress => "bg-amber-500/15 text-amber-400",
        GigStatus::Completed => "bg-sky-500/15 text-sky-400",
        GigStatus::Cancelled => "bg-slate-500/15 text-slate-400",
    };

    rsx! {
        span { class: "px-2 py-0.5 rounded-full text-xs font-medium whitespace-nowrap {classes}",
            "{status.label()}"
        }
    }
}
