//! Giglance Client - Dioxus web application
//!
//! This crate contains the web/desktop client for Giglance, a freelance gig
//! marketplace. Server state lives in global stores; views read the stores
//! reactively and dispatch async actions that call the HTTP API.

pub mod api_client;
pub mod cold_start;
pub mod config;
pub mod logging;
pub mod storage;
pub mod time;

pub mod components;
pub mod push;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::ApiClient;
pub use push::{PushManager, PUSH_STATE};
pub use routes::Route;
