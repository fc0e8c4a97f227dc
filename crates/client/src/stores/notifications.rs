//! Notification queue for push-delivered "hired" events.
//!
//! FIFO and ephemeral: entries come in only through the push channel, and
//! leave either by explicit dismissal or when the head of the queue expires
//! 5 seconds after becoming head. Only one expiry timer runs at a time; the
//! toast component restarts it whenever the head changes. An expiry for an
//! entry that is no longer head is stale and ignored.

use dioxus::prelude::*;

/// How long the head of the queue stays visible before auto-removal.
pub const NOTIFICATION_TTL_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub gig_id: String,
    pub gig_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Remove exactly the entry with this id, wherever it sits.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    /// Expiry fired for `id`. Removes the head only if that entry is still
    /// the head; a stale timer is a no-op.
    pub fn expire_head(&mut self, id: &str) -> bool {
        if self.items.first().map(|n| n.id == id).unwrap_or(false) {
            self.items.remove(0);
            true
        } else {
            false
        }
    }

    pub fn head(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub static NOTIFICATIONS: GlobalSignal<NotificationQueue> = Signal::global(NotificationQueue::default);

/// Enqueue a hire notification. Only the push-event channel calls this.
pub fn push_hired(message: String, gig_id: String, gig_title: String) {
    let notification = Notification {
        id: uuid::Uuid::new_v4().to_string(),
        message,
        gig_id,
        gig_title,
    };
    NOTIFICATIONS.write().push(notification);
}

pub fn dismiss(id: &str) {
    NOTIFICATIONS.write().dismiss(id);
}

pub fn expire_head(id: &str) {
    NOTIFICATIONS.write().expire_head(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            message: format!("hired on {id}"),
            gig_id: "g1".to_string(),
            gig_title: "Logo design".to_string(),
        }
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = NotificationQueue::default();
        queue.push(notification("n1"));
        queue.push(notification("n2"));
        queue.push(notification("n3"));

        assert_eq!(queue.head().unwrap().id, "n1");
        assert!(queue.expire_head("n1"));
        assert_eq!(queue.head().unwrap().id, "n2");
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut queue = NotificationQueue::default();
        queue.push(notification("n1"));
        queue.push(notification("n2"));

        // Head was dismissed before its timer fired.
        queue.dismiss("n1");
        assert!(!queue.expire_head("n1"));
        assert_eq!(queue.head().unwrap().id, "n2");
    }

    #[test]
    fn expiry_on_empty_queue_is_harmless() {
        let mut queue = NotificationQueue::default();
        assert!(!queue.expire_head("n1"));
    }

    #[test]
    fn dismiss_removes_exactly_one_entry_regardless_of_position() {
        let mut queue = NotificationQueue::default();
        queue.push(notification("n1"));
        queue.push(notification("n2"));
        queue.push(notification("n3"));

        queue.dismiss("n2");
        let ids: Vec<&str> = queue.items().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["n1", "n3"]);

        // Head timer still belongs to n1; its expiry still works.
        assert!(queue.expire_head("n1"));
        assert_eq!(queue.head().unwrap().id, "n3");
    }
}
