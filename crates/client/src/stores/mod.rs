//! Global stores for application state.
//!
//! Each store is a plain transition type held in a `GlobalSignal`, plus
//! async action functions that drive the pending -> fulfilled | rejected
//! cycle against the REST API. Components read the signals reactively and
//! never mutate state except through declared transitions.

pub mod auth;
pub mod bids;
pub mod gigs;
pub mod notifications;

pub use auth::{AuthState, AUTH};
pub use bids::{BidsState, BIDS};
pub use gigs::{GigsState, GIGS};
pub use notifications::{Notification, NotificationQueue, NOTIFICATIONS};
