//! Centralized default constants for quicknotes.
//!
//! This module is the single source of truth for shared default values.
//! All crates should reference these constants instead of defining their
//! own magic numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Fixed page size for note listing and search.
pub const PAGE_SIZE: i64 = 10;

// =============================================================================
// DATABASE POOL
// =============================================================================

/// Default maximum number of connections in the pool.
pub const POOL_MAX_CONNECTIONS: u32 = 10;

/// Default connection acquire timeout in seconds.
pub const POOL_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle connection timeout in seconds.
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 600;
