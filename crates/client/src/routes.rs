//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{AppShell, CreateGig, Dashboard, GigDetails, GigFeed, Login, Register};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Every page renders inside the shell (navbar, toasts, overlay)
    #[layout(AppShell)]
        #[route("/")]
        GigFeed {},

        // Auth routes
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},

        // Gigs
        #[route("/gigs/:id")]
        GigDetails { id: String },
        #[route("/create-gig")]
        CreateGig {},

        // Personal dashboard (my gigs, my bids)
        #[route("/dashboard")]
        Dashboard {},
}
