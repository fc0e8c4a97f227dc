//! Gigs store: the open feed, the current user's gigs, and the detail view.
//!
//! The three projections are refetched independently and are NOT kept in
//! sync on mutation beyond the transitions below. A gig created here shows
//! up in `my_gigs` only after that list is refetched; updates and deletes
//! touch the feed and the detail view but not `my_gigs`. That staleness is
//! deliberate: the dashboard refetches on mount anyway.

use dioxus::prelude::*;
use giglance_shared::{CreateGigRequest, Gig, UpdateGigRequest};

use crate::api_client::ApiClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GigsState {
    /// Open feed, filtered server-side by search/status.
    pub gigs: Vec<Gig>,
    /// Gigs owned by the current user (dashboard).
    pub my_gigs: Vec<Gig>,
    /// Detail view.
    pub current_gig: Option<Gig>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GigsState {
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn feed_loaded(&mut self, gigs: Vec<Gig>) {
        self.loading = false;
        self.gigs = gigs;
    }

    pub fn current_loaded(&mut self, gig: Gig) {
        self.loading = false;
        self.current_gig = Some(gig);
    }

    pub fn mine_loaded(&mut self, gigs: Vec<Gig>) {
        self.loading = false;
        self.my_gigs = gigs;
    }

    /// New gig goes to the top of the feed only.
    pub fn created(&mut self, gig: Gig) {
        self.loading = false;
        self.gigs.insert(0, gig);
    }

    /// Server state replaces matching copies in the feed and the detail
    /// view; `my_gigs` is untouched.
    pub fn updated(&mut self, gig: Gig) {
        self.loading = false;
        if let Some(existing) = self.gigs.iter_mut().find(|g| g.id == gig.id) {
            *existing = gig.clone();
        }
        if self
            .current_gig
            .as_ref()
            .map(|g| g.id == gig.id)
            .unwrap_or(false)
        {
            self.current_gig = Some(gig);
        }
    }

    /// Removes from the feed only.
    pub fn deleted(&mut self, gig_id: &str) {
        self.loading = false;
        self.gigs.retain(|g| g.id != gig_id);
    }

    pub fn clear_current(&mut self) {
        self.current_gig = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

pub static GIGS: GlobalSignal<GigsState> = Signal::global(GigsState::default);

/// Fetch the open feed. Both filters go to the server as query params.
pub async fn fetch_gigs(search: &str, status: &str) {
    GIGS.write().pending();
    let client = ApiClient::new();
    let path = format!(
        "/gigs?search={}&status={}",
        urlencoding::encode(search),
        urlencoding::encode(status)
    );
    match client.get_json::<Vec<Gig>>(&path).await {
        Ok(gigs) => GIGS.write().feed_loaded(gigs),
        Err(err) => GIGS
            .write()
            .failed(err.user_message("Failed to fetch gigs")),
    }
}

pub async fn fetch_gig(id: &str) {
    GIGS.write().pending();
    let client = ApiClient::new();
    match client.get_json::<Gig>(&format!("/gigs/{id}")).await {
        Ok(gig) => GIGS.write().current_loaded(gig),
        Err(err) => GIGS.write().failed(err.user_message("Failed to fetch gig")),
    }
}

/// Create a gig. Returns the created record so the caller can navigate to
/// it; `None` means the error is already in the store.
pub async fn create_gig(req: CreateGigRequest) -> Option<Gig> {
    GIGS.write().pending();
    let client = ApiClient::new();
    match client.post_json::<_, Gig>("/gigs", &req).await {
        Ok(gig) => {
            GIGS.write().created(gig.clone());
            Some(gig)
        }
        Err(err) => {
            GIGS.write()
                .failed(err.user_message("Failed to create gig"));
            None
        }
    }
}

pub async fn update_gig(id: &str, req: UpdateGigRequest) -> Option<Gig> {
    GIGS.write().pending();
    let client = ApiClient::new();
    match client.put_json::<_, Gig>(&format!("/gigs/{id}"), &req).await {
        Ok(gig) => {
            GIGS.write().updated(gig.clone());
            Some(gig)
        }
        Err(err) => {
            GIGS.write()
                .failed(err.user_message("Failed to update gig"));
            None
        }
    }
}

pub async fn delete_gig(id: &str) -> bool {
    GIGS.write().pending();
    let client = ApiClient::new();
    match client.delete(&format!("/gigs/{id}")).await {
        Ok(()) => {
            GIGS.write().deleted(id);
            true
        }
        Err(err) => {
            GIGS.write()
                .failed(err.user_message("Failed to delete gig"));
            false
        }
    }
}

pub async fn fetch_my_gigs() {
    GIGS.write().pending();
    let client = ApiClient::new();
    match client.get_json::<Vec<Gig>>("/gigs/my/gigs").await {
        Ok(gigs) => GIGS.write().mine_loaded(gigs),
        Err(err) => GIGS
            .write()
            .failed(err.user_message("Failed to fetch your gigs")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use giglance_shared::GigStatus;

    fn gig(id: &str, owner: &str) -> Gig {
        Gig {
            id: id.to_string(),
            title: format!("gig {id}"),
            description: String::new(),
            budget: 100.0,
            status: GigStatus::Open,
            owner_id: owner.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn loading_holds_only_between_pending_and_settle() {
        let mut state = GigsState::default();
        state.pending();
        assert!(state.loading && state.error.is_none());

        state.feed_loaded(vec![gig("g1", "u1")]);
        assert!(!state.loading);

        state.pending();
        state.failed("Failed to fetch gigs".to_string());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch gigs"));

        // Next pending clears the error again.
        state.pending();
        assert!(state.error.is_none());
    }

    #[test]
    fn clear_error_drops_the_error_and_nothing_else() {
        let mut state = GigsState::default();
        state.feed_loaded(vec![gig("g1", "u1")]);
        state.failed("Failed to create gig".to_string());

        state.clear_error();
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.gigs.len(), 1);
    }

    #[test]
    fn created_prepends_to_feed_but_not_my_gigs() {
        let mut state = GigsState::default();
        state.feed_loaded(vec![gig("g1", "u2")]);
        state.mine_loaded(vec![]);

        state.created(gig("g2", "u1"));
        assert_eq!(state.gigs[0].id, "g2");
        assert_eq!(state.gigs.len(), 2);
        assert!(state.my_gigs.is_empty());
    }

    #[test]
    fn updated_applies_to_feed_and_current_but_not_my_gigs() {
        let mut state = GigsState::default();
        state.feed_loaded(vec![gig("g1", "u1"), gig("g2", "u2")]);
        state.mine_loaded(vec![gig("g1", "u1")]);
        state.current_loaded(gig("g1", "u1"));

        let mut changed = gig("g1", "u1");
        changed.title = "renamed".to_string();
        changed.status = GigStatus::InProgress;
        state.updated(changed);

        assert_eq!(state.gigs[0].title, "renamed");
        assert_eq!(state.gigs[1].title, "gig g2");
        assert_eq!(state.current_gig.as_ref().unwrap().title, "renamed");
        // Deliberately stale until refetched.
        assert_eq!(state.my_gigs[0].title, "gig g1");
    }

    #[test]
    fn updated_ignores_unmatched_current_gig() {
        let mut state = GigsState::default();
        state.current_loaded(gig("g9", "u1"));
        state.updated(gig("g1", "u1"));
        assert_eq!(state.current_gig.as_ref().unwrap().id, "g9");
    }

    #[test]
    fn deleted_removes_from_feed_only() {
        let mut state = GigsState::default();
        state.feed_loaded(vec![gig("g1", "u1"), gig("g2", "u1")]);
        state.mine_loaded(vec![gig("g1", "u1")]);

        state.deleted("g1");
        assert_eq!(state.gigs.len(), 1);
        assert_eq!(state.gigs[0].id, "g2");
        assert_eq!(state.my_gigs.len(), 1);
    }
}
