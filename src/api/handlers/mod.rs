//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod redirect;
pub mod save;

pub use redirect::redirect_handler;
pub use save::save_handler;
