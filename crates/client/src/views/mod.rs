//! View components for the application.

pub mod app_shell;
pub mod create_gig;
pub mod dashboard;
pub mod gig_details;
pub mod gig_feed;
pub mod login;
pub mod register;

pub use app_shell::AppShell;
pub use create_gig::CreateGig;
pub use dashboard::Dashboard;
pub use gig_details::GigDetails;
pub use gig_feed::GigFeed;
pub use login::Login;
pub use register::Register;
