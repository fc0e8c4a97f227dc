//! Reusable UI components.

pub mod cold_start_overlay;
pub mod notification_toast;
pub mod protected;

pub use cold_start_overlay::ColdStartOverlay;
pub use notification_toast::NotificationToast;
pub use protected::Protected;
