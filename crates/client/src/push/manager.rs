//! Channel lifecycle: open on authentication, close on logout.
//!
//! The connection handle is owned by the `PushManager` component's scope,
//! not an ambient singleton. Opening is idempotent: the effect keeps an
//! existing live connection when the session still belongs to the same user,
//! so re-renders never stack duplicate listeners.

use std::rc::Rc;

use dioxus::prelude::*;
use giglance_shared::ServerEvent;

use super::connection::{ConnectionState, PushConnection};
use crate::config;
use crate::stores::auth::AUTH;
use crate::stores::bids::BIDS;
use crate::stores::notifications;

/// Connection state of the session's push channel, for UI indicators.
pub static PUSH_STATE: GlobalSignal<ConnectionState> =
    Signal::global(|| ConnectionState::Disconnected);

struct ActiveChannel {
    user_id: String,
    connection: Rc<PushConnection>,
}

/// What the lifecycle effect should do with the channel, given who is signed
/// in and who the current channel belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChannelPlan {
    /// Session and channel agree; keep the live connection.
    Keep,
    /// Open a channel for this user, closing any previous one first.
    Open(String),
    /// Session ended; close the channel.
    Close,
    /// No session and nothing open.
    Idle,
}

fn plan_channel(session_user: Option<&str>, channel_user: Option<&str>) -> ChannelPlan {
    match (session_user, channel_user) {
        (Some(session), Some(channel)) if session == channel => ChannelPlan::Keep,
        (Some(session), _) => ChannelPlan::Open(session.to_string()),
        (None, Some(_)) => ChannelPlan::Close,
        (None, None) => ChannelPlan::Idle,
    }
}

/// Component that owns the push channel for the whole app.
#[component]
pub fn PushManager(children: Element) -> Element {
    let mut active = use_signal(|| None::<ActiveChannel>);

    // Open/close the channel as the session changes.
    use_effect(move || {
        let session_user = {
            let auth = AUTH.read();
            if auth.is_authenticated {
                auth.user.as_ref().map(|u| u.id.clone())
            } else {
                None
            }
        };

        let channel_user = active.read().as_ref().map(|c| c.user_id.clone());

        match plan_channel(session_user.as_deref(), channel_user.as_deref()) {
            ChannelPlan::Keep | ChannelPlan::Idle => {}
            ChannelPlan::Open(user_id) => {
                if let Some(previous) = active.write().take() {
                    crate::log_info!("session changed, closing old push channel");
                    previous.connection.close();
                }

                crate::log_info!("opening push channel for user {}", user_id);
                let expected_user = user_id.clone();
                let url_builder = move || {
                    // Stop reconnecting once this session is over.
                    let auth = AUTH.read();
                    let still_current = auth.is_authenticated
                        && auth.user.as_ref().map(|u| u.id.as_str())
                            == Some(expected_user.as_str());
                    still_current.then(config::push_url)
                };

                let connection = PushConnection::new(user_id.clone(), url_builder, handle_event);
                active.set(Some(ActiveChannel {
                    user_id,
                    connection: Rc::new(connection),
                }));
            }
            ChannelPlan::Close => {
                crate::log_info!("logged out, closing push channel");
                if let Some(previous) = active.write().take() {
                    previous.connection.close();
                }
                *PUSH_STATE.write() = ConnectionState::Disconnected;
            }
        }
    });

    // Mirror the connection's state for components that show it.
    use_effect(move || {
        if let Some(channel) = active.read().as_ref() {
            let state = channel.connection.state.read().clone();
            *PUSH_STATE.write() = state;
        }
    });

    children
}

/// Reconcile one server event into the stores.
fn handle_event(event: ServerEvent) {
    match event {
        ServerEvent::Hired {
            message,
            gig_id,
            gig_title,
            bid_id,
        } => {
            crate::log_info!("hired event for gig {}", gig_id);
            notifications::push_hired(message, gig_id, gig_title);
            if let Some(bid_id) = bid_id {
                BIDS.write().mark_hired(&bid_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopen_for_the_same_user_keeps_the_live_channel() {
        assert_eq!(plan_channel(Some("u1"), Some("u1")), ChannelPlan::Keep);
    }

    #[test]
    fn login_opens_a_channel() {
        assert_eq!(
            plan_channel(Some("u1"), None),
            ChannelPlan::Open("u1".to_string())
        );
    }

    #[test]
    fn user_switch_replaces_the_channel() {
        assert_eq!(
            plan_channel(Some("u2"), Some("u1")),
            ChannelPlan::Open("u2".to_string())
        );
    }

    #[test]
    fn logout_closes_only_when_a_channel_is_open() {
        assert_eq!(plan_channel(None, Some("u1")), ChannelPlan::Close);
        assert_eq!(plan_channel(None, None), ChannelPlan::Idle);
    }
}
