//! Toast stack for hire notifications.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::notifications::{self, NOTIFICATIONS, NOTIFICATION_TTL_MS};
use crate::time;

/// Renders the notification queue and drives the head-expiry timer.
///
/// One timer at a time: whenever a new entry becomes head, a fresh 5 s timer
/// is armed for it. The expiry is keyed by notification id, so a timer whose
/// entry was already dismissed fizzles instead of removing a newer head.
#[component]
pub fn NotificationToast() -> Element {
    let nav = use_navigator();
    let mut armed_for = use_signal(|| None::<String>);

    use_effect(move || {
        let head_id = NOTIFICATIONS.read().head().map(|n| n.id.clone());
        let Some(id) = head_id else { return };
        if armed_for.peek().as_deref() == Some(id.as_str()) {
            return;
        }
        armed_for.set(Some(id.clone()));
        spawn(async move {
            time::sleep_ms(NOTIFICATION_TTL_MS).await;
            notifications::expire_head(&id);
        });
    });

    let queue = NOTIFICATIONS.read();
    if queue.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed top-20 right-4 z-50 flex flex-col gap-2 w-80",
            for notification in queue.items().iter() {
                div {
                    key: "{notification.id}",
                    class: "bg-emerald-600 text-white rounded-lg shadow-lg p-4 cursor-pointer hover:bg-emerald-700 transition-colors",
                    onclick: {
                        let gig_id = notification.gig_id.clone();
                        let id = notification.id.clone();
                        move |_| {
                            notifications::dismiss(&id);
                            nav.push(Route::GigDetails { id: gig_id.clone() });
                        }
                    },
                    div { class: "flex items-start justify-between gap-2",
                        div {
                            p { class: "font-semibold text-sm", "You got hired!" }
                            p { class: "text-sm mt-1", "{notification.message}" }
                            p { class: "text-xs mt-1 opacity-80", "{notification.gig_title}" }
                        }
                        button {
                            class: "text-white/70 hover:text-white text-lg leading-none",
                            onclick: {
                                let id = notification.id.clone();
                                move |e: MouseEvent| {
                                    e.stop_propagation();
                                    notifications::dismiss(&id);
                                }
                            },
                            "\u{00d7}"
                        }
                    }
                }
            }
        }
    }
}
