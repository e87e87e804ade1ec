//! Application state machine
//!
//! Idle → Analyzing → Results | Error, and back to Idle on reset.

pub mod controller;
pub mod state;

pub use controller::{Controller, user_message};
pub use state::AppState;
