//! Note service: ownership-scoped CRUD, pagination, and search dispatch.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use quicknotes_core::defaults::PAGE_SIZE;
use quicknotes_core::{
    CreateNoteRequest, Error, ListNotesRequest, Note, NoteRepository, PagedResult, Result,
    SearchNotesRequest, UpdateNoteRequest,
};

/// One pagination window: a clamped 1-indexed page plus its limit/offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageRequest {
    page_number: i64,
    limit: i64,
    offset: i64,
}

/// Convert a 1-indexed page number to the 0-indexed offset used by the
/// store. Values <= 0 are clamped to page 1.
fn page_request(page_number: i64) -> PageRequest {
    let page_number = page_number.max(1);
    PageRequest {
        page_number,
        limit: PAGE_SIZE,
        offset: (page_number - 1) * PAGE_SIZE,
    }
}

/// Service enforcing note ownership and pagination.
///
/// A note is visible and mutable only by its owner; an ownership mismatch
/// is reported as `NotFound`, indistinguishable from a nonexistent id, so
/// callers cannot probe for other users' notes.
#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
}

impl NoteService {
    /// Create a new NoteService over the given repository.
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// List one user's non-archived notes, newest first.
    pub async fn list_notes(&self, user_id: Uuid, page_number: i64) -> Result<PagedResult<Note>> {
        self.list_by_archived(user_id, false, page_number).await
    }

    /// List one user's archived notes, newest first.
    pub async fn list_archived_notes(
        &self,
        user_id: Uuid,
        page_number: i64,
    ) -> Result<PagedResult<Note>> {
        self.list_by_archived(user_id, true, page_number).await
    }

    async fn list_by_archived(
        &self,
        user_id: Uuid,
        archived: bool,
        page_number: i64,
    ) -> Result<PagedResult<Note>> {
        let page = page_request(page_number);
        let window = self
            .notes
            .list_owned(ListNotesRequest {
                user_id,
                archived,
                limit: page.limit,
                offset: page.offset,
            })
            .await?;

        debug!(
            subsystem = "service",
            component = "note_service",
            op = "list_notes",
            user_id = %user_id,
            archived = archived,
            page_number = page.page_number,
            result_count = window.notes.len(),
            "Listed notes"
        );

        Ok(PagedResult::from_window(
            window.notes,
            window.total,
            page.page_number,
        ))
    }

    /// Search one user's notes for a case-insensitive substring of title or
    /// content. `include_archived` selects between the all-notes and
    /// non-archived query variants.
    pub async fn search_notes(
        &self,
        user_id: Uuid,
        query: &str,
        page_number: i64,
        include_archived: bool,
    ) -> Result<PagedResult<Note>> {
        let page = page_request(page_number);
        let window = self
            .notes
            .search_owned(SearchNotesRequest {
                user_id,
                query: query.to_string(),
                include_archived,
                limit: page.limit,
                offset: page.offset,
            })
            .await?;

        debug!(
            subsystem = "service",
            component = "note_service",
            op = "search_notes",
            user_id = %user_id,
            query = query,
            page_number = page.page_number,
            result_count = window.notes.len(),
            "Searched notes"
        );

        Ok(PagedResult::from_window(
            window.notes,
            window.total,
            page.page_number,
        ))
    }

    /// Fetch a note by id on behalf of a user.
    ///
    /// Fails with `NotFound` when the note is absent OR owned by another
    /// user; the two cases are deliberately indistinguishable.
    pub async fn get_note_by_id(&self, note_id: Uuid, user_id: Uuid) -> Result<Note> {
        let note = self
            .notes
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Note not found with id: {}", note_id)))?;

        if note.user_id != user_id {
            // Not revealing the existence of a note owned by another user
            return Err(Error::NotFound("Note not found".to_string()));
        }

        Ok(note)
    }

    /// Create a note owned by `cmd.user_id`, starting non-archived.
    pub async fn create_note(&self, cmd: CreateNoteRequest) -> Result<Note> {
        let note = self.notes.insert(cmd).await?;

        debug!(
            subsystem = "service",
            component = "note_service",
            op = "create_note",
            user_id = %note.user_id,
            note_id = %note.id,
            "Created note"
        );

        Ok(note)
    }

    /// Overwrite a note's title and content after re-resolving ownership.
    pub async fn update_note(&self, cmd: UpdateNoteRequest) -> Result<()> {
        let note = self.get_note_by_id(cmd.id, cmd.user_id).await?;
        self.notes
            .update_content(note.id, &cmd.title, &cmd.content)
            .await
    }

    /// Hard-delete a note after re-resolving ownership.
    pub async fn delete_note(&self, note_id: Uuid, user_id: Uuid) -> Result<()> {
        let note = self.get_note_by_id(note_id, user_id).await?;
        self.notes.delete(note.id).await
    }

    /// Archive a note after re-resolving ownership.
    pub async fn archive_note(&self, note_id: Uuid, user_id: Uuid) -> Result<()> {
        let note = self.get_note_by_id(note_id, user_id).await?;
        self.notes.set_archived(note.id, true).await
    }

    /// Unarchive a note after re-resolving ownership.
    pub async fn unarchive_note(&self, note_id: Uuid, user_id: Uuid) -> Result<()> {
        let note = self.get_note_by_id(note_id, user_id).await?;
        self.notes.set_archived(note.id, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_first_page() {
        let page = page_request(1);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.limit, PAGE_SIZE);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_page_request_third_page() {
        let page = page_request(3);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.offset, 20);
    }

    #[test]
    fn test_page_request_clamps_zero_and_negative() {
        assert_eq!(page_request(0), page_request(1));
        assert_eq!(page_request(-5), page_request(1));
        assert_eq!(page_request(0).offset, 0);
    }
}
