//! Native/Desktop push-channel implementation using `tokio-tungstenite`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use futures_util::{SinkExt, StreamExt};
use giglance_shared::{ClientCommand, ServerEvent};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{ConnectionState, ReconnectConfig};

/// The session's push-channel connection (native implementation).
pub struct PushConnection {
    /// Current connection state
    pub state: SyncSignal<ConnectionState>,
    /// Set by `close()`; checked by the loop and the event handler.
    closed: Arc<AtomicBool>,
    /// Wakes the loop out of its connected wait on close().
    shutdown: Arc<tokio::sync::Notify>,
}

impl PushConnection {
    /// Open the channel; see the wasm implementation for the contract.
    pub fn new(
        user_id: String,
        url_builder: impl Fn() -> Option<String> + Send + Sync + 'static,
        on_event: impl Fn(ServerEvent) + Send + Sync + 'static,
    ) -> Self {
        let state = Signal::new_maybe_sync(ConnectionState::Disconnected);
        let closed = Arc::new(AtomicBool::new(false));
        let shutdown = Arc::new(tokio::sync::Notify::new());

        let connection = Self {
            state,
            closed: closed.clone(),
            shutdown: shutdown.clone(),
        };

        start_connection_loop(
            user_id,
            state,
            closed,
            shutdown,
            Arc::new(url_builder),
            Arc::new(on_event),
        );

        connection
    }

    /// Tear the channel down. Idempotent.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.shutdown.notify_waiters();
    }
}

fn start_connection_loop(
    user_id: String,
    mut state: SyncSignal<ConnectionState>,
    closed: Arc<AtomicBool>,
    shutdown: Arc<tokio::sync::Notify>,
    url_builder: Arc<dyn Fn() -> Option<String> + Send + Sync>,
    on_event: Arc<dyn Fn(ServerEvent) + Send + Sync>,
) {
    tokio::spawn(async move {
        let reconnect_config = ReconnectConfig::default();
        let mut attempt = 0u32;

        loop {
            if closed.load(Ordering::SeqCst) {
                break;
            }

            let Some(url) = url_builder() else {
                // Session gone; idle until it comes back or we are closed.
                state.set(ConnectionState::Disconnected);
                tokio::time::sleep(tokio::time::Duration::from_millis(1000)).await;
                continue;
            };

            if attempt == 0 {
                state.set(ConnectionState::Connecting);
            } else {
                state.set(ConnectionState::Reconnecting { attempt });
            }

            match connect_async(&url).await {
                Ok((ws_stream, _response)) => {
                    state.set(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("push channel connected");

                    let (mut write, mut read) = ws_stream.split();

                    // Announce our identity so the backend routes events here.
                    match serde_json::to_string(&ClientCommand::Register {
                        user_id: user_id.clone(),
                    }) {
                        Ok(json) => {
                            if let Err(e) = write.send(Message::Text(json.into())).await {
                                crate::log_error!("register send failed: {}", e);
                            }
                        }
                        Err(e) => crate::log_error!("register serialize failed: {}", e),
                    }

                    let (close_tx, mut close_rx) = tokio::sync::mpsc::unbounded_channel::<()>();

                    // Read task: parse events and reconcile into the stores.
                    // Delivery goes through the closed-flag gate so a socket
                    // lingering past close() stays inert.
                    let closed_for_read = closed.clone();
                    let gated_event = {
                        let closed = closed.clone();
                        let on_event = on_event.clone();
                        super::gated(
                            move || closed.load(Ordering::SeqCst),
                            move |event| on_event(event),
                        )
                    };
                    tokio::spawn(async move {
                        while let Some(msg_result) = read.next().await {
                            if closed_for_read.load(Ordering::SeqCst) {
                                break;
                            }
                            match msg_result {
                                Ok(Message::Text(text)) => {
                                    match serde_json::from_str::<ServerEvent>(text.as_str()) {
                                        Ok(event) => gated_event(event),
                                        Err(e) => {
                                            crate::log_warn!("unrecognized push message: {}", e)
                                        }
                                    }
                                }
                                Ok(Message::Close(_)) => {
                                    crate::log_info!("push channel received close frame");
                                    break;
                                }
                                Ok(_) => {
                                    // Ping/pong handled by tungstenite; ignore binary.
                                }
                                Err(e) => {
                                    crate::log_error!("push channel read error: {}", e);
                                    break;
                                }
                            }
                        }
                        let _ = close_tx.send(());
                    });

                    // Park until the socket dies or close() is called.
                    tokio::select! {
                        _ = close_rx.recv() => {}
                        _ = shutdown.notified() => {
                            let _ = write.send(Message::Close(None)).await;
                        }
                    }

                    crate::log_info!("push channel closed");
                    state.set(ConnectionState::Disconnected);
                }
                Err(e) => {
                    crate::log_error!("push channel error: {}", e);

                    if closed.load(Ordering::SeqCst) {
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
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay as u64)).await;
                    attempt += 1;
                }
            }
        }
    });
}
