//! HTTP protocol layer module
//!
//! Adapts hyper requests to the inspector and builds the host's responses.

pub mod request;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_500_response, build_index_response,
};
