//! Domain entities for the partner dashboard.
//!
//! Plain data structures shared by the repository and service layers. They
//! carry no persistence concerns; normalization happens on construction.

pub mod analytics;
pub mod application;
pub mod commission;
pub mod partner;
pub mod payout;
pub mod types;
pub mod user;
