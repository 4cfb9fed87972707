//! Core traits for quicknotes abstractions.
//!
//! These traits define the store query contract that concrete
//! implementations must satisfy, enabling pluggable backends and
//! testability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Note, Role, User};

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNoteRequest {
    /// Owner of the new note.
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Request for updating a note's title and content.
#[derive(Debug, Clone)]
pub struct UpdateNoteRequest {
    pub id: Uuid,
    /// Acting user; the update is rejected as not-found when the note is
    /// owned by someone else.
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Request for listing one owner's notes by archived state.
#[derive(Debug, Clone)]
pub struct ListNotesRequest {
    pub user_id: Uuid,
    /// Equality filter on the archived flag.
    pub archived: bool,
    pub limit: i64,
    pub offset: i64,
}

/// Request for searching one owner's notes by substring.
#[derive(Debug, Clone)]
pub struct SearchNotesRequest {
    pub user_id: Uuid,
    /// Case-insensitive substring matched against title or content.
    pub query: String,
    /// When false, archived notes are excluded from the result.
    pub include_archived: bool,
    pub limit: i64,
    pub offset: i64,
}

/// One window of notes plus the total match count before pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePage {
    pub notes: Vec<Note>,
    pub total: i64,
}

/// Repository for note CRUD and owner-scoped queries.
///
/// Every mutating call runs in its own transaction; queries are ordered by
/// creation time descending.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note with `archived = false`.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Fetch a note by ID regardless of owner.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>>;

    /// List one owner's notes filtered by archived state.
    async fn list_owned(&self, req: ListNotesRequest) -> Result<NotePage>;

    /// Search one owner's notes by case-insensitive substring.
    async fn search_owned(&self, req: SearchNotesRequest) -> Result<NotePage>;

    /// Overwrite a note's title and content.
    async fn update_content(&self, id: Uuid, title: &str, content: &str) -> Result<()>;

    /// Set the archived flag.
    async fn set_archived(&self, id: Uuid, archived: bool) -> Result<()>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

// =============================================================================
// USER REPOSITORY
// =============================================================================

/// Request for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `BadRequest` when the email is already
    /// taken (case-insensitive, enforced at the store level).
    async fn insert(&self, req: CreateUserRequest) -> Result<User>;

    /// Look up a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Check whether a user with this email exists, case-insensitively.
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
}
