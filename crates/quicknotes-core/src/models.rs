//! Core data models for quicknotes.
//!
//! These types are shared across all quicknotes crates and represent the
//! core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::defaults::PAGE_SIZE;

// =============================================================================
// USER TYPES
// =============================================================================

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

impl Role {
    /// Wire/storage representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::User => "ROLE_USER",
        }
    }
}

impl FromStr for Role {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "ROLE_ADMIN" => Ok(Role::Admin),
            "ROLE_USER" => Ok(Role::User),
            other => Err(crate::Error::BadRequest(format!(
                "Unknown role: {}",
                other
            ))),
        }
    }
}

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Opaque credential value; hashing is the auth layer's concern.
    pub password: String,
    pub role: Role,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A note owned by exactly one user.
///
/// The owner reference (`user_id`) never changes after creation. The
/// `archived` flag is toggled independently of content edits; deletion is a
/// hard delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub archived: bool,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One page of results plus page metadata.
///
/// `page_number` is 1-indexed. Metadata is derived mechanically from the
/// item window, the total match count, and the page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    pub total_elements: i64,
    pub page_number: i64,
    pub total_pages: i64,
    pub is_first: bool,
    pub is_last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PagedResult<T> {
    /// Build a page from a fetched window and the total match count.
    ///
    /// `page_number` is 1-indexed; an empty result set has zero pages and
    /// reports itself as both first and last.
    pub fn new(data: Vec<T>, total_elements: i64, page_number: i64, page_size: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + page_size - 1) / page_size
        };
        Self {
            data,
            total_elements,
            page_number,
            total_pages,
            is_first: page_number <= 1,
            is_last: page_number >= total_pages,
            has_next: page_number < total_pages,
            has_previous: page_number > 1,
        }
    }

    /// Build a page using the fixed default page size.
    pub fn from_window(data: Vec<T>, total_elements: i64, page_number: i64) -> Self {
        Self::new(data, total_elements, page_number, PAGE_SIZE)
    }

    /// Convert the item type while keeping the page metadata.
    pub fn map<R>(self, f: impl FnMut(T) -> R) -> PagedResult<R> {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page_number: self.page_number,
            total_pages: self.total_pages,
            is_first: self.is_first,
            is_last: self.is_last,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
