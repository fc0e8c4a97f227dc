//! Push-channel protocol.
//!
//! One WebSocket connection per authenticated session. The client announces
//! itself with `register` right after connecting so the backend can route
//! events; the backend pushes `hired` events at the freelancer whose bid was
//! accepted. Messages are JSON with a `type` tag.

use serde::{Deserialize, Serialize};

/// Client-to-server messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientCommand {
    #[serde(rename_all = "camelCase")]
    Register { user_id: String },
}

/// Server-to-client events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    Hired {
        message: String,
        gig_id: String,
        gig_title: String,
        /// Present when the event should also flip a bid's status locally.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bid_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_serializes_with_type_tag() {
        let cmd = ClientCommand::Register {
            user_id: "u42".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"register","userId":"u42"}"#
        );
    }

    #[test]
    fn hired_event_parses_with_bid_id() {
        let json = r#"{
            "type": "hired",
            "message": "You were hired for Logo design!",
            "gigId": "g1",
            "gigTitle": "Logo design",
            "bidId": "b9"
        }"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            ServerEvent::Hired {
                message: "You were hired for Logo design!".to_string(),
                gig_id: "g1".to_string(),
                gig_title: "Logo design".to_string(),
                bid_id: Some("b9".to_string()),
            }
        );
    }

    #[test]
    fn hired_event_parses_without_bid_id() {
        let json = r#"{"type":"hired","message":"m","gigId":"g","gigTitle":"t"}"#;
        let event: ServerEvent = serde_json::from_str(json).unwrap();
        let ServerEvent::Hired { bid_id, .. } = event;
        assert_eq!(bid_id, None);
    }
}
