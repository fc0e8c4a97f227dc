//! WASM/Web push-channel implementation using `web_sys::WebSocket`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use giglance_shared::{ClientCommand, ServerEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;

use super::{ConnectionState, ReconnectConfig};

/// The session's push-channel connection (WASM implementation).
///
/// Owns its reconnect loop; `close()` ends the loop and detaches the event
/// handler so late events cannot reach the stores.
pub struct PushConnection {
    /// Current connection state
    pub state: Signal<ConnectionState>,
    /// Set by `close()`; checked by the loop and the event handler.
    closed: Rc<Cell<bool>>,
    /// The live socket, if any, so `close()` can shut it down.
    socket: Rc<RefCell<Option<web_sys::WebSocket>>>,
}

impl PushConnection {
    /// Open the channel. `url_builder` runs on every (re)connect attempt and
    /// returns `None` when the session no longer wants a connection; the
    /// `register` announcement for `user_id` is sent as soon as the socket
    /// opens.
    pub fn new(
        user_id: String,
        url_builder: impl Fn() -> Option<String> + 'static,
        on_event: impl Fn(ServerEvent) + 'static,
    ) -> Self {
        let state = Signal::new(ConnectionState::Disconnected);
        let closed = Rc::new(Cell::new(false));
        let socket = Rc::new(RefCell::new(None));

        let connection = Self {
            state,
            closed: closed.clone(),
            socket: socket.clone(),
        };

        start_connection_loop(
            user_id,
            state,
            closed,
            socket,
            Rc::new(url_builder),
            Rc::new(on_event),
        );

        connection
    }

    /// Tear the channel down. Idempotent.
    pub fn close(&self) {
        self.closed.set(true);
        if let Some(ws) = self.socket.borrow_mut().take() {
            let _ = ws.close();
        }
    }
}

fn start_connection_loop(
    user_id: String,
    mut state: Signal<ConnectionState>,
    closed: Rc<Cell<bool>>,
    socket_slot: Rc<RefCell<Option<web_sys::WebSocket>>>,
    url_builder: Rc<dyn Fn() -> Option<String>>,
    on_event: Rc<dyn Fn(ServerEvent)>,
) {
    spawn_local(async move {
        let reconnect_config = ReconnectConfig::default();
        let mut attempt = 0u32;

        loop {
            if closed.get() {
                break;
            }

            let Some(url) = url_builder() else {
                // Session gone; idle until it comes back or we are closed.
                state.set(ConnectionState::Disconnected);
                gloo_timers::future::TimeoutFuture::new(1000).await;
                continue;
            };

            if attempt == 0 {
                state.set(ConnectionState::Connecting);
            } else {
                state.set(ConnectionState::Reconnecting { attempt });
            }

            // A socket lingering past close() must not write to the stores.
            let gated_event: Rc<dyn Fn(ServerEvent)> = {
                let closed = closed.clone();
                let on_event = on_event.clone();
                Rc::new(super::gated(
                    move || closed.get(),
                    move |event| on_event(event),
                ))
            };

            match connect_websocket(&url, gated_event).await {
                Ok(ws) => {
                    state.set(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("push channel connected");

                    // Announce our identity so the backend routes events here.
                    match serde_json::to_string(&ClientCommand::Register {
                        user_id: user_id.clone(),
                    }) {
                        Ok(json) => {
                            if let Err(e) = ws.send_with_str(&json) {
                                crate::log_error!("register send failed: {:?}", e);
                            }
                        }
                        Err(e) => crate::log_error!("register serialize failed: {}", e),
                    }

                    *socket_slot.borrow_mut() = Some(ws.clone());

                    // Wake the loop when the socket closes (including via close()).
                    let (close_tx, mut close_rx) = futures_channel::mpsc::unbounded::<()>();
                    let onclose_callback =
                        Closure::wrap(Box::new(move |_: web_sys::CloseEvent| {
                            let _ = close_tx.unbounded_send(());
                        }) as Box<dyn FnMut(web_sys::CloseEvent)>);
                    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
                    onclose_callback.forget();

                    close_rx.next().await;
                    crate::log_info!("push channel closed");
                    socket_slot.borrow_mut().take();
                    state.set(ConnectionState::Disconnected);
                }
                Err(e) => {
                    crate::log_error!("push channel error: {}", e);

                    if closed.get() {
                        break;
                    }

                    if reconnect_config.max_attempts > 0
                        && attempt >= reconnect_config.max_attempts
                    {
                        state.set(ConnectionState::Failed {
                            reason: format!(
                                "Max reconnect attempts ({}) exceeded",
                                reconnect_config.max_attempts
                            ),
                        });
                        break;
                    }

                    let delay = reconnect_config.delay_for_attempt(attempt);
                    crate::log_info!(
                        "reconnecting push channel in {}ms (attempt {})",
                        delay,
                        attempt + 1
                    );
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    attempt += 1;
                }
            }
        }
    });
}

/// Establish a socket and wire the message handler; the caller owns the
/// close handling from here.
async fn connect_websocket(
    url: &str,
    on_event: Rc<dyn Fn(ServerEvent)>,
) -> Result<web_sys::WebSocket, String> {
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    let ws = WebSocket::new(url).map_err(|e| format!("Failed to create WebSocket: {:?}", e))?;

    let is_open = Rc::new(Cell::new(false));
    let error_reason = Rc::new(RefCell::new(None::<String>));

    let is_open_clone = is_open.clone();
    let onopen_callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
        is_open_clone.set(true);
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
    onopen_callback.forget();

    let error_reason_close = error_reason.clone();
    let onclose_callback = Closure::wrap(Box::new(move |e: CloseEvent| {
        let reason = if e.reason().is_empty() {
            format!("Code {}", e.code())
        } else {
            e.reason()
        };
        *error_reason_close.borrow_mut() = Some(reason);
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
    onclose_callback.forget();

    let error_reason_err = error_reason.clone();
    let onerror_callback = Closure::wrap(Box::new(move |_: web_sys::ErrorEvent| {
        *error_reason_err.borrow_mut() = Some("WebSocket error".to_string());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    ws.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
    onerror_callback.forget();

    let onmessage_callback = Closure::wrap(Box::new(move |e: MessageEvent| {
        if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
            let text: String = text.into();
            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => on_event(event),
                Err(e) => crate::log_warn!("unrecognized push message: {}", e),
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
    onmessage_callback.forget();

    // Wait for the connection to open (5 second timeout).
    for _ in 0..500 {
        if is_open.get() {
            return Ok(ws);
        }
        if let Some(reason) = error_reason.borrow().clone() {
            return Err(reason);
        }
        // Yield to allow callbacks to fire
        gloo_timers::future::TimeoutFuture::new(10).await;
    }

    Err("Connection timeout".to_string())
}
