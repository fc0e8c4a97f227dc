//! Gig detail page: the gig itself, its bids, and the bid/hire actions.

use dioxus::prelude::*;
use giglance_shared::{Bid, BidStatus, CreateBidRequest, GigStatus};

use crate::stores::auth::AUTH;
use crate::stores::bids::{self, BIDS};
use crate::stores::gigs::{self, GIGS};
use crate::views::gig_feed::StatusChip;

#[component]
pub fn GigDetails(id: String) -> Element {
    // Track the route param so the fetch re-runs when navigating between gigs
    let mut track_id = use_signal(|| id.clone());
    if track_id() != id {
        track_id.set(id.clone());
    }

    use_effect(move || {
        let gig_id = track_id();
        spawn(async move {
            gigs::fetch_gig(&gig_id).await;
            bids::fetch_bids_by_gig(&gig_id).await;
        });
    });

    use_drop(move || {
        GIGS.write().clear_current();
    });

    let gigs_state = GIGS.read();
    let auth_state = AUTH.read();

    let Some(gig) = gigs_state.current_gig.as_ref() else {
        if let Some(err) = gigs_state.error.as_ref() {
            return rsx! {
                div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                    "{err}"
                }
            };
        }
        return rsx! {
            div { class: "text-center py-20 text-slate-400", "Loading gig..." }
        };
    };

    let viewer_id = auth_state.user.as_ref().map(|u| u.id.as_str());
    let is_owner = viewer_id == Some(gig.owner_id.as_str());
    let can_bid = auth_state.is_authenticated && !is_owner && gig.status == GigStatus::Open;
    let posted = gig.created_at.format("%b %e, %Y").to_string();

    rsx! {
        div { class: "space-y-6",
            div { class: "bg-slate-800 rounded-xl p-6",
                div { class: "flex items-start justify-between gap-3 mb-3",
                    h1 { class: "text-2xl font-bold", "{gig.title}" }
                    StatusChip { status: gig.status }
                }
                p { class: "text-slate-300 whitespace-pre-wrap mb-6", "{gig.description}" }
                div { class: "flex items-center gap-6 text-sm",
                    span { class: "text-emerald-400 font-semibold text-lg", "${gig.budget}" }
                    span { class: "text-slate-500", "Posted {posted}" }
                }
            }

            if can_bid {
                BidForm { gig_id: gig.id.clone() }
            }

            BidList { gig_id: gig.id.clone(), is_owner, gig_open: gig.status == GigStatus::Open }
        }
    }
}

#[component]
fn BidForm(gig_id: String) -> Element {
    let mut message = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let message_value = message.read().trim().to_string();
        if message_value.is_empty() {
            form_error.set(Some("Tell the client why they should pick you".to_string()));
            return;
        }
        let Ok(price_value) = price.read().trim().parse::<f64>() else {
            form_error.set(Some("Enter a valid price".to_string()));
            return;
        };
        if price_value <= 0.0 {
            form_error.set(Some("Price must be greater than zero".to_string()));
            return;
        }
        form_error.set(None);

        let gig_id = gig_id.clone();
        spawn(async move {
            let accepted = bids::create_bid(CreateBidRequest {
                gig_id,
                message: message_value,
                price: price_value,
            })
            .await;
            if accepted {
                message.set(String::new());
                price.set(String::new());
            }
        });
    };

    let bids_state = BIDS.read();
    let error = form_error.read().clone().or_else(|| bids_state.error.clone());

    rsx! {
        div { class: "bg-slate-800 rounded-xl p-6",
            h2 { class: "text-lg font-semibold mb-4", "Place a bid" }
            form { onsubmit: handle_submit, class: "space-y-4",
                textarea {
                    class: "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors h-24 resize-none",
                    placeholder: "Describe your approach...",
                    value: "{message}",
                    oninput: move |e: FormEvent| {
                        message.set(e.value());
                        form_error.set(None);
                        BIDS.write().clear_error();
                    },
                }
                div { class: "flex gap-3",
                    input {
                        class: "w-40 bg-slate-900 border border-slate-700 rounded-lg px-4 py-2.5 text-white placeholder-slate-500 focus:outline-none focus:border-indigo-500 transition-colors",
                        r#type: "number",
                        min: "1",
                        step: "1",
                        placeholder: "Your price ($)",
                        value: "{price}",
                        oninput: move |e: FormEvent| {
                            price.set(e.value());
                            form_error.set(None);
                            BIDS.write().clear_error();
                        },
                    }
                    button {
                        r#type: "submit",
                        class: "px-5 py-2.5 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg font-medium transition-colors disabled:opacity-50",
                        disabled: bids_state.loading,
                        if bids_state.loading { "Submitting..." } else { "Submit bid" }
                    }
                }
                if let Some(err) = error.as_ref() {
                    div { class: "p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-red-400 text-sm",
                        "{err}"
                    }
                }
            }
        }
    }
}

#[component]
fn BidList(gig_id: String, is_owner: bool, gig_open: bool) -> Element {
    let bids_state = BIDS.read();
    let count = bids_state.bids.len();

    rsx! {
        div { class: "bg-slate-800 rounded-xl p-6",
            h2 { class: "text-lg font-semibold mb-4", "Bids ({count})" }
            if bids_state.bids.is_empty() {
                p { class: "text-slate-400 text-sm", "No bids yet." }
            } else {
                div { class: "space-y-3",
                    for bid in bids_state.bids.iter() {
                        BidItem {
                            key: "{bid.id}",
                            bid: bid.clone(),
                            // Hiring only makes sense for the owner on a
                            // still-open gig with a pending bid.
                            can_hire: is_owner && gig_open && bid.status == BidStatus::Pending,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BidItem(bid: Bid, can_hire: bool) -> Element {
    let status_classes = match bid.status {
        BidStatus::Pending => "bg-slate-500/15 text-slate-300",
        BidStatus::Hired => "bg-emerald-500/15 text-emerald-400",
        BidStatus::Rejected => "bg-red-500/15 text-red-400",
    };

    rsx! {
        div { class: "bg-slate-900 rounded-lg p-4 flex items-start justify-between gap-4",
            div {
                div { class: "flex items-center gap-2 mb-1",
                    span { class: "text-emerald-400 font-semibold", "${bid.price}" }
                    span { class: "px-2 py-0.5 rounded-full text-xs font-medium {status_classes}",
                        "{bid.status.label()}"
                    }
                }
                p { class: "text-sm text-slate-300", "{bid.message}" }
            }
            if can_hire {
                button {
                    class: "px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm rounded-lg transition-colors shrink-0",
                    onclick: {
                        let bid_id = bid.id.clone();
                        let gig_id = bid.gig_id.clone();
                        move |_| {
                            let bid_id = bid_id.clone();
                            let gig_id = gig_id.clone();
                            spawn(async move {
                                if bids::hire_bid(&bid_id).await {
                                    // The hire moved the gig to in-progress
                                    // server-side; refresh the detail view.
                                    gigs::fetch_gig(&gig_id).await;
                                }
                            });
                        }
                    },
                    "Hire"
                }
            }
        }
    }
}
