//! Backend test support utilities
//!
//! Shared by the backend's integration tests: logging initialization,
//! problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
