//! Test helpers for generating unique test data
//!
//! Tests share one in-memory store per app instance; unique names keep
//! assertions from matching another test's rows.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("room");
/// let id2 = unique_str("room");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("room-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique display name short enough for a player (`{prefix} {suffix}`).
///
/// Uses the random tail of a ULID so names created in the same millisecond
/// still differ.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let name = unique_name("Ann");
/// assert!(name.starts_with("Ann "));
/// assert!(name.chars().count() <= 32);
/// ```
pub fn unique_name(prefix: &str) -> String {
    let id = Ulid::new().to_string();
    format!("{} {}", prefix, &id[id.len() - 8..])
}
