//! Push-event channel for near-real-time "hired" notifications.
//!
//! One WebSocket connection per authenticated session. The flow:
//!
//! ```text
//!   PushManager (component)
//!        | opens on login, closes on logout
//!        v
//!   PushConnection -- register(userId) --> backend
//!        |
//!        | hired { message, gigId, gigTitle, bidId }
//!        v
//!   Global stores (NOTIFICATIONS queue, BIDS.my_bids)
//!        |
//!        v
//!   Components (read stores reactively, never the socket)
//! ```
//!
//! Components never touch the socket. Incoming events are reconciled into
//! the global stores by the manager's event handler, and the UI re-renders
//! off the stores.

mod connection;
mod manager;

pub use connection::{ConnectionState, PushConnection, ReconnectConfig};
pub use manager::{PushManager, PUSH_STATE};
