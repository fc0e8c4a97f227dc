//! Push-channel connection with state tracking and auto-reconnect.
//!
//! Shared types live here; the socket implementation is platform-specific
//! (`web_sys::WebSocket` on wasm, `tokio-tungstenite` on desktop).

/// Connection state of the push channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting | ConnectionState::Reconnecting { .. }
        )
    }
}

/// Auto-reconnect behavior for the channel.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Retry ceiling; 0 retries forever.
    pub max_attempts: u32,
    /// Wait before the first retry, in milliseconds.
    pub initial_delay_ms: u32,
    /// Backoff never grows past this, in milliseconds.
    pub max_delay_ms: u32,
    /// Growth factor applied per failed attempt.
    pub backoff_multiplier: f32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 1.5,
        }
    }
}

impl ReconnectConfig {
    /// Delay before retry number `attempt`.
    pub fn delay_for_attempt(&self, attempt: u32) -> u32 {
        let delay = self.initial_delay_ms as f32 * self.backoff_multiplier.powi(attempt as i32);
        (delay as u32).min(self.max_delay_ms)
    }
}

/// Wrap an event callback so it goes quiet once the connection is closed.
/// An event racing `close()` must never reach the stores.
fn gated<E>(is_closed: impl Fn() -> bool, on_event: impl Fn(E)) -> impl Fn(E) {
    move |event| {
        if !is_closed() {
            on_event(event);
        }
    }
}

// Socket implementation per build target
#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub use connection_wasm::PushConnection;

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub use connection_native::PushConnection;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn backoff_grows_and_caps() {
        let config = ReconnectConfig::default();
        assert_eq!(config.delay_for_attempt(0), 1000);
        assert_eq!(config.delay_for_attempt(1), 1500);
        assert_eq!(config.delay_for_attempt(20), config.max_delay_ms);
    }

    #[test]
    fn events_after_close_never_reach_the_handler() {
        let closed = Rc::new(Cell::new(false));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let handler = {
            let closed = closed.clone();
            let seen = seen.clone();
            gated(
                move || closed.get(),
                move |event: &str| seen.borrow_mut().push(event.to_string()),
            )
        };

        handler("hired-before");
        closed.set(true);
        // A socket lingering past close() can still fire; it must be inert.
        handler("hired-after");

        assert_eq!(*seen.borrow(), ["hired-before"]);
    }
}
