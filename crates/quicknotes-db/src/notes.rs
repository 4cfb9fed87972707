//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use quicknotes_core::{
    new_v7, CreateNoteRequest, Error, ListNotesRequest, Note, NotePage, NoteRepository, Result,
    SearchNotesRequest,
};

use crate::escape_like;

/// PostgreSQL implementation of NoteRepository.
///
/// Listing and search are owner-scoped and ordered by creation time
/// descending, with the time-ordered UUIDv7 id as tiebreaker.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

const NOTE_COLUMNS: &str =
    "id, user_id, title, content, archived, created_at_utc, updated_at_utc";

/// Map a database row to a Note.
fn map_row_to_note(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        content: row.get("content"),
        archived: row.get("archived"),
        created_at_utc: row.get("created_at_utc"),
        updated_at_utc: row.get("updated_at_utc"),
    }
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let note = Note {
            id: new_v7(),
            user_id: req.user_id,
            title: req.title,
            content: req.content,
            archived: false,
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO notes (id, user_id, title, content, archived, created_at_utc, updated_at_utc)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(note.id)
        .bind(note.user_id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.archived)
        .bind(note.created_at_utc)
        .bind(note.updated_at_utc)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query(&format!("SELECT {} FROM notes WHERE id = $1", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(map_row_to_note))
    }

    async fn list_owned(&self, req: ListNotesRequest) -> Result<NotePage> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notes WHERE user_id = $1 AND archived = $2",
        )
        .bind(req.user_id)
        .bind(req.archived)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        let rows = sqlx::query(&format!(
            "SELECT {} FROM notes
             WHERE user_id = $1 AND archived = $2
             ORDER BY created_at_utc DESC, id DESC
             LIMIT $3 OFFSET $4",
            NOTE_COLUMNS
        ))
        .bind(req.user_id)
        .bind(req.archived)
        .bind(req.limit)
        .bind(req.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(NotePage {
            notes: rows.into_iter().map(map_row_to_note).collect(),
            total,
        })
    }

    async fn search_owned(&self, req: SearchNotesRequest) -> Result<NotePage> {
        let pattern = format!("%{}%", escape_like(&req.query));

        // include_archived selects between the all-notes and non-archived
        // query variants; both match title or content case-insensitively.
        let archived_clause = if req.include_archived {
            ""
        } else {
            "AND archived = false"
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM notes
             WHERE user_id = $1 {} AND (title ILIKE $2 OR content ILIKE $2)",
            archived_clause
        );
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(req.user_id)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        let page_sql = format!(
            "SELECT {} FROM notes
             WHERE user_id = $1 {} AND (title ILIKE $2 OR content ILIKE $2)
             ORDER BY created_at_utc DESC, id DESC
             LIMIT $3 OFFSET $4",
            NOTE_COLUMNS, archived_clause
        );
        let rows = sqlx::query(&page_sql)
            .bind(req.user_id)
            .bind(&pattern)
            .bind(req.limit)
            .bind(req.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(NotePage {
            notes: rows.into_iter().map(map_row_to_note).collect(),
            total,
        })
    }

    async fn update_content(&self, id: Uuid, title: &str, content: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE notes SET title = $1, content = $2, updated_at_utc = $3 WHERE id = $4",
        )
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note not found with id: {}", id)));
        }
        Ok(())
    }

    async fn set_archived(&self, id: Uuid, archived: bool) -> Result<()> {
        let result =
            sqlx::query("UPDATE notes SET archived = $1, updated_at_utc = $2 WHERE id = $3")
                .bind(archived)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note not found with id: {}", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note not found with id: {}", id)));
        }
        Ok(())
    }
}
