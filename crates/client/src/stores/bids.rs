//! Bids store: bids on one gig (detail view) and the current user's own
//! bids (dashboard). Same cross-projection staleness caveat as the gigs
//! store: the two lists are refetched independently.

use dioxus::prelude::*;
use giglance_shared::{Bid, BidStatus, CreateBidRequest};

use crate::api_client::ApiClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidsState {
    /// All bids for the gig currently in the detail view.
    pub bids: Vec<Bid>,
    /// Bids placed by the current user.
    pub my_bids: Vec<Bid>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BidsState {
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn gig_bids_loaded(&mut self, bids: Vec<Bid>) {
        self.loading = false;
        self.bids = bids;
    }

    pub fn mine_loaded(&mut self, bids: Vec<Bid>) {
        self.loading = false;
        self.my_bids = bids;
    }

    /// New bid goes to the top of the detail projection only.
    pub fn created(&mut self, bid: Bid) {
        self.loading = false;
        self.bids.insert(0, bid);
    }

    /// Hire settled: the server's record replaces the matching detail entry
    /// wholesale. Not a partial merge; the server is authoritative.
    pub fn hired(&mut self, bid: Bid) {
        self.loading = false;
        if let Some(existing) = self.bids.iter_mut().find(|b| b.id == bid.id) {
            *existing = bid;
        }
    }

    /// Push-channel reconciliation: the event recipient is the freelancer,
    /// so only `my_bids` is touched. An unknown id is a no-op.
    pub fn mark_hired(&mut self, bid_id: &str) {
        if let Some(bid) = self.my_bids.iter_mut().find(|b| b.id == bid_id) {
            bid.status = BidStatus::Hired;
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

pub static BIDS: GlobalSignal<BidsState> = Signal::global(BidsState::default);

/// Place a bid on a gig. Returns whether it was accepted.
pub async fn create_bid(req: CreateBidRequest) -> bool {
    BIDS.write().pending();
    let client = ApiClient::new();
    match client.post_json::<_, Bid>("/bids", &req).await {
        Ok(bid) => {
            BIDS.write().created(bid);
            true
        }
        Err(err) => {
            BIDS.write()
                .failed(err.user_message("Failed to create bid"));
            false
        }
    }
}

pub async fn fetch_bids_by_gig(gig_id: &str) {
    BIDS.write().pending();
    let client = ApiClient::new();
    match client.get_json::<Vec<Bid>>(&format!("/bids/gig/{gig_id}")).await {
        Ok(bids) => BIDS.write().gig_bids_loaded(bids),
        Err(err) => BIDS
            .write()
            .failed(err.user_message("Failed to fetch bids")),
    }
}

pub async fn fetch_my_bids() {
    BIDS.write().pending();
    let client = ApiClient::new();
    match client.get_json::<Vec<Bid>>("/bids/my/bids").await {
        Ok(bids) => BIDS.write().mine_loaded(bids),
        Err(err) => BIDS
            .write()
            .failed(err.user_message("Failed to fetch your bids")),
    }
}

/// Accept a bid as the gig owner.
pub async fn hire_bid(bid_id: &str) -> bool {
    BIDS.write().pending();
    let client = ApiClient::new();
    match client
        .post_json::<_, Bid>(&format!("/bids/{bid_id}/hire"), &serde_json::json!({}))
        .await
    {
        Ok(bid) => {
            BIDS.write().hired(bid);
            true
        }
        Err(err) => {
            BIDS.write()
                .failed(err.user_message("Failed to hire freelancer"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(id: &str, status: BidStatus) -> Bid {
        Bid {
            id: id.to_string(),
            gig_id: "g1".to_string(),
            freelancer_id: "u1".to_string(),
            message: "pick me".to_string(),
            price: 50.0,
            status,
        }
    }

    #[test]
    fn created_prepends_to_detail_projection_only() {
        let mut state = BidsState::default();
        state.gig_bids_loaded(vec![bid("b1", BidStatus::Pending)]);
        state.mine_loaded(vec![]);

        state.created(bid("b2", BidStatus::Pending));
        assert_eq!(state.bids[0].id, "b2");
        assert!(state.my_bids.is_empty());
    }

    #[test]
    fn hired_overwrites_the_full_record_by_id() {
        let mut state = BidsState::default();
        state.gig_bids_loaded(vec![bid("b1", BidStatus::Pending), bid("b2", BidStatus::Pending)]);

        let mut server_copy = bid("b2", BidStatus::Hired);
        server_copy.message = "server rewrote this".to_string();
        state.hired(server_copy);

        assert_eq!(state.bids[0].status, BidStatus::Pending);
        assert_eq!(state.bids[1].status, BidStatus::Hired);
        assert_eq!(state.bids[1].message, "server rewrote this");
    }

    #[test]
    fn mark_hired_flips_exactly_one_entry_in_my_bids() {
        let mut state = BidsState::default();
        state.mine_loaded(vec![bid("b1", BidStatus::Pending), bid("b2", BidStatus::Pending)]);
        state.gig_bids_loaded(vec![bid("b1", BidStatus::Pending)]);

        state.mark_hired("b2");
        assert_eq!(state.my_bids[0].status, BidStatus::Pending);
        assert_eq!(state.my_bids[1].status, BidStatus::Hired);
        // Detail projection untouched by the push path.
        assert_eq!(state.bids[0].status, BidStatus::Pending);
    }

    #[test]
    fn mark_hired_with_unknown_id_changes_nothing() {
        let mut state = BidsState::default();
        state.mine_loaded(vec![bid("b1", BidStatus::Pending)]);
        let before = state.clone();

        state.mark_hired("nope");
        assert_eq!(state, before);
    }

    #[test]
    fn rejection_surfaces_the_fallback_and_clears_on_next_pending() {
        let mut state = BidsState::default();
        state.pending();
        state.failed("Failed to hire freelancer".to_string());
        assert_eq!(state.error.as_deref(), Some("Failed to hire freelancer"));

        state.pending();
        assert!(state.error.is_none());
        assert!(state.loading);
    }

    #[test]
    fn clear_error_leaves_the_projections_alone() {
        let mut state = BidsState::default();
        state.gig_bids_loaded(vec![bid("b1", BidStatus::Pending)]);
        state.failed("Failed to create bid".to_string());

        state.clear_error();
        assert!(state.error.is_none());
        assert_eq!(state.bids.len(), 1);
    }
}
