//! Top-level layout: navbar, routed content, toasts, cold-start overlay.

use dioxus::prelude::*;

use crate::components::{ColdStartOverlay, NotificationToast};
use crate::push::PUSH_STATE;
use crate::routes::Route;
use crate::stores::auth::{self, AUTH};

#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-900 text-slate-100",
            Navbar {}
            main { class: "max-w-5xl mx-auto px-4 py-8",
                Outlet::<Route> {}
            }
            NotificationToast {}
            ColdStartOverlay {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let nav = use_navigator();
    let auth_state = AUTH.read();

    rsx! {
        nav { class: "bg-slate-800 border-b border-slate-700",
            div { class: "max-w-5xl mx-auto px-4 h-16 flex items-center justify-between",
                div { class: "flex items-center gap-6",
                    Link {
                        to: Route::GigFeed {},
                        class: "text-xl font-bold text-indigo-400",
                        "Giglance"
                    }
                    Link {
                        to: Route::GigFeed {},
                        class: "text-sm text-slate-300 hover:text-white transition-colors",
                        "Browse Gigs"
                    }
                    if auth_state.is_authenticated {
                        Link {
                            to: Route::Dashboard {},
                            class: "text-sm text-slate-300 hover:text-white transition-colors",
                            "Dashboard"
                        }
                    }
                }
                div { class: "flex items-center gap-4",
                    if auth_state.is_authenticated {
                        ConnectionDot {}
                        Link {
                            to: Route::CreateGig {},
                            class: "px-3 py-1.5 bg-indigo-500 hover:bg-indigo-600 text-white text-sm rounded-lg transition-colors",
                            "Post a Gig"
                        }
                        if let Some(user) = auth_state.user.as_ref() {
                            span { class: "text-sm text-slate-400", "{user.name}" }
                        }
                        button {
                            class: "text-sm text-slate-300 hover:text-white transition-colors",
                            onclick: move |_| {
                                spawn(async move {
                                    auth::logout().await;
                                    nav.push(Route::Login {});
                                });
                            },
                            "Log out"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "text-sm text-slate-300 hover:text-white transition-colors",
                            "Log in"
                        }
                        Link {
                            to: Route::Register {},
                            class: "px-3 py-1.5 bg-indigo-500 hover:bg-indigo-600 text-white text-sm rounded-lg transition-colors",
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}

/// Small indicator for the push channel, so a broken live connection is
/// visible without digging through logs.
#[component]
fn ConnectionDot() -> Element {
    let state = PUSH_STATE.read();
    let (color, title) = if state.is_connected() {
        ("bg-emerald-400", "Live updates connected")
    } else if state.is_connecting() {
        ("bg-amber-400", "Connecting live updates...")
    } else {
        ("bg-slate-500", "Live updates offline")
    };

    rsx! {
        span {
            class: "w-2.5 h-2.5 rounded-full {color}",
            title: "{title}",
        }
    }
}
