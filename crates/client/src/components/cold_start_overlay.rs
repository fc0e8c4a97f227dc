//! Full-screen notice while a sleeping backend wakes up.

use dioxus::prelude::*;

use crate::cold_start::COLD_START;
use crate::time;

/// Free-tier hosts advertise roughly this wake-up time; the countdown is a
/// courtesy estimate, not a deadline.
const WAKE_BUDGET_SECS: u64 = 50;

/// Shown once an in-flight request has been pending long enough to look like
/// a backend cold start. Disappears the moment the batch settles.
#[component]
pub fn ColdStartOverlay() -> Element {
    let mut tick = use_signal(|| 0u64);

    // Re-render once a second while visible so the elapsed counter moves.
    use_effect(move || {
        let ticks = tick();
        let active = COLD_START.read().is_cold_start();
        if active {
            spawn(async move {
                time::sleep_ms(1000).await;
                tick.set(ticks + 1);
            });
        }
    });

    let (visible, remaining_secs) = {
        let cold = COLD_START.read();
        let visible = cold.is_cold_start() && cold.is_loading();
        let elapsed = cold
            .request_start_time()
            .map(|start| ((time::now_ms() - start).max(0) / 1000) as u64)
            .unwrap_or(0);
        (visible, WAKE_BUDGET_SECS.saturating_sub(elapsed))
    };

    if !visible {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed inset-0 bg-black/80 flex items-center justify-center z-[60]",
            div { class: "bg-slate-800 rounded-xl shadow-2xl p-8 max-w-md mx-4 text-center text-white",
                div { class: "w-12 h-12 border-4 border-indigo-500 border-t-transparent rounded-full animate-spin mx-auto mb-6" }
                h2 { class: "text-xl font-bold mb-2", "Waking up the server" }
                p { class: "text-slate-300 text-sm",
                    "The backend was asleep and is starting up. This usually takes under a minute."
                }
                if remaining_secs > 0 {
                    p { class: "text-slate-400 text-xs mt-4", "About {remaining_secs}s remaining" }
                } else {
                    p { class: "text-slate-400 text-xs mt-4", "Almost there..." }
                }
            }
        }
    }
}
