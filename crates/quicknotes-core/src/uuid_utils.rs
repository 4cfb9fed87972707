//! UUID v7 utilities for time-ordered identifiers.
//!
//! User and note IDs are UUIDv7 (RFC 9562): the first 48 bits embed a
//! millisecond Unix timestamp, so IDs sort by creation time and serve as a
//! stable tiebreaker for `created_at_utc` ordering.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// UUIDv7 embeds a Unix timestamp (milliseconds) in the first 48 bits,
/// providing natural time-ordering.
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Check whether a UUID is version 7.
pub fn is_v7(id: &Uuid) -> bool {
    id.get_version_num() == 7
}
