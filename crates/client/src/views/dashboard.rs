//! Personal dashboard: gigs the user posted and bids they placed.

use dioxus::prelude::*;
use giglance_shared::BidStatus;

use crate::components::Protected;
use crate::routes::Route;
use crate::stores::bids::{self, BIDS};
use crate::stores::gigs::{self, GIGS};
use crate::views::gig_feed::StatusChip;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let mut current_tab = use_signal(|| "my-gigs");

    // Both lists are refetched on every mount; in-memory copies may be stale
    // after hires delivered through the push channel.
    use_effect(move || {
        spawn(async move {
            gigs::fetch_my_gigs().await;
            bids::fetch_my_bids().await;
        });
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold mb-6", "Dashboard" }
            div { class: "flex gap-2 mb-6",
                TabButton {
                    label: "My Gigs",
                    active: *current_tab.read() == "my-gigs",
                    onclick: move |_| current_tab.set("my-gigs"),
                }
                TabButton {
                    label: "My Bids",
                    active: *current_tab.read() == "my-bids",
                    onclick: move |_| current_tab.set("my-bids"),
                }
            }
            if *current_tab.read() == "my-gigs" {
                MyGigs {}
            } else {
                MyBids {}
            }
        }
    }
}

#[component]
fn TabButton(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let classes = if active {
        "bg-indigo-500 text-white"
    } else {
        "bg-slate-800 text-slate-300 hover:bg-slate-700"
    };

    rsx! {
        button {
            class: "px-4 py-2 rounded-lg text-sm font-medium transition-colors {classes}",
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}

#[component]
fn MyGigs() -> Element {
    let state = GIGS.read();

    rsx! {
        div {
            if let Some(err) = state.error.as_ref() {
                div { class: "p-3 mb-4 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                    "{err}"
                }
            }
            if state.loading && state.my_gigs.is_empty() {
                div { class: "text-center py-12 text-slate-400", "Loading..." }
            } else if state.my_gigs.is_empty() {
                div { class: "text-center py-12 text-slate-400",
                    p { "You haven't posted any gigs yet." }
                    Link {
                        to: Route::CreateGig {},
                        class: "inline-block mt-3 text-indigo-400 hover:text-indigo-300",
                        "Post your first gig"
                    }
                }
            } else {
                div { class: "space-y-3",
                    for gig in state.my_gigs.iter() {
                        div {
                            key: "{gig.id}",
                            class: "bg-slate-800 rounded-xl p-5 flex items-center justify-between gap-4",
                            div { class: "min-w-0",
                                Link {
                                    to: Route::GigDetails { id: gig.id.clone() },
                                    class: "font-semibold hover:text-indigo-300 transition-colors",
                                    "{gig.title}"
                                }
                                div { class: "flex items-center gap-3 mt-1 text-sm",
                                    span { class: "text-emerald-400", "${gig.budget}" }
                                    StatusChip { status: gig.status }
                                }
                            }
                            button {
                                class: "text-sm text-red-400 hover:text-red-300 transition-colors shrink-0",
                                onclick: {
                                    let gig_id = gig.id.clone();
                                    move |_| {
                                        let gig_id = gig_id.clone();
                                        spawn(async move {
                                            if gigs::delete_gig(&gig_id).await {
                                                // The feed transition does not touch
                                                // my_gigs; pull the list again.
                                                gigs::fetch_my_gigs().await;
                                            }
                                        });
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MyBids() -> Element {
    let state = BIDS.read();

    rsx! {
        div {
            if let Some(err) = state.error.as_ref() {
                div { class: "p-3 mb-4 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                    "{err}"
                }
            }
            if state.loading && state.my_bids.is_empty() {
                div { class: "text-center py-12 text-slate-400", "Loading..." }
            } else if state.my_bids.is_empty() {
                div { class: "text-center py-12 text-slate-400",
                    p { "You haven't placed any bids yet." }
                    Link {
                        to: Route::GigFeed {},
                        class: "inline-block mt-3 text-indigo-400 hover:text-indigo-300",
                        "Browse open gigs"
                    }
                }
            } else {
                div { class: "space-y-3",
                    for bid in state.my_bids.iter() {
                        div {
                            key: "{bid.id}",
                            class: "bg-slate-800 rounded-xl p-5",
                            div { class: "flex items-center justify-between gap-4",
                                div { class: "min-w-0",
                                    div { class: "flex items-center gap-2 mb-1",
                                        span { class: "text-emerald-400 font-semibold", "${bid.price}" }
                                        BidStatusChip { status: bid.status }
                                    }
                                    p { class: "text-sm text-slate-300 truncate", "{bid.message}" }
                                }
                                Link {
                                    to: Route::GigDetails { id: bid.gig_id.clone() },
                                    class: "text-sm text-indigo-400 hover:text-indigo-300 transition-colors shrink-0",
                                    "View gig"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BidStatusChip(status: BidStatus) -> Element {
    let classes = match status {
        BidStatus::Pending => "bg-slate-500/15 text-slate-300",
        BidStatus::Hired => "bg-emerald-500/15 text-emerald-400",
        BidStatus::Rejected => "bg-red-500/15 text-red-400",
    };

    rsx! {
        span { class: "px-2 py-0.5 rounded-full text-xs font-medium {classes}",
            "{status.label()}"
        }
    }
}
