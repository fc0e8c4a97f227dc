//! Gate for routes that require a signed-in user.

use dioxus::prelude::*;

use crate::api_client::TOKEN_KEY;
use crate::routes::Route;
use crate::stores::auth::AUTH;
use crate::storage;

/// Renders `children` only for an authenticated session; otherwise redirects
/// to the login page. While a saved session is still being restored, shows a
/// placeholder instead of bouncing the user prematurely.
#[component]
pub fn Protected(children: Element) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        let auth = AUTH.read();
        // A stored token means session restore is (about to be) running;
        // hold off until it settles. Restore removes a dead token, so a
        // rejected session still ends up redirected.
        if !auth.loading && !auth.is_authenticated && !storage::exists(TOKEN_KEY) {
            nav.push(Route::Login {});
        }
    });

    let auth = AUTH.read();
    if !auth.is_authenticated {
        return rsx! {
            div { class: "flex items-center justify-center py-20 text-slate-400", "Loading..." }
        };
    }

    children
}
