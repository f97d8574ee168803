//! Request handler module
//!
//! Runs the inspector in front of every request, then routes to the
//! host's responses.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
