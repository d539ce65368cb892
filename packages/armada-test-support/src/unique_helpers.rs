//! Test helpers for generating unique test data
//!
//! ULID-suffixed names keep fixtures from colliding when tests share a
//! store or run repeatedly.

use ulid::Ulid;

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use armada_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// let b = unique_str("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name.
pub fn unique_player_name(prefix: &str) -> String {
    unique_str(prefix)
}
