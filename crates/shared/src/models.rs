//! Data models for the giglance marketplace API.
//!
//! These are client-side projections; the server is authoritative for every
//! field. Wire names are camelCase to match the backend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Identity ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

// --- Gigs ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GigStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl GigStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GigStatus::Open => "Open",
            GigStatus::InProgress => "In Progress",
            GigStatus::Completed => "Completed",
            GigStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Non-negative; enforced server-side.
    pub budget: f64,
    pub status: GigStatus,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

// --- Bids ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    Pending,
    Hired,
    Rejected,
}

impl BidStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BidStatus::Pending => "Pending",
            BidStatus::Hired => "Hired",
            BidStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub gig_id: String,
    pub freelancer_id: String,
    pub message: String,
    /// Non-negative; enforced server-side.
    pub price: f64,
    pub status: BidStatus,
}

// --- Request payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGigRequest {
    pub title: String,
    pub description: String,
    pub budget: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GigStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    pub gig_id: String,
    pub message: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gig_status_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&GigStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<GigStatus>("\"open\"").unwrap(),
            GigStatus::Open
        );
    }

    #[test]
    fn gig_deserializes_from_camel_case() {
        let json = r#"{
            "id": "g1",
            "title": "Build a landing page",
            "description": "One page, responsive",
            "budget": 250.0,
            "status": "open",
            "ownerId": "u1",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let gig: Gig = serde_json::from_str(json).unwrap();
        assert_eq!(gig.owner_id, "u1");
        assert_eq!(gig.status, GigStatus::Open);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let req = UpdateGigRequest {
            status: Some(GigStatus::Cancelled),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"status":"cancelled"}"#
        );
    }
}
