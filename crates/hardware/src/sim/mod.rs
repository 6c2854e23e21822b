//! Session driving.
//!
//! A session strings multiple multiplication runs together over one sink and
//! one cycle counter, the way the reference driver programs do.

/// The session driver.
pub mod session;

pub use session::Session;
