//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the
//! `tahrir-server`, split by functionality.

pub mod general;
pub mod generation;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use generation::*;
