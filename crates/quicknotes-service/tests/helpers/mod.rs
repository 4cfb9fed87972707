//! In-memory repository fakes for service-level tests.
//!
//! These implement the core repository traits over a `Mutex<Vec<_>>` with
//! the same observable semantics as the Postgres implementations:
//! creation-time-descending ordering, case-insensitive matching, and
//! store-level email uniqueness.

// Each integration test binary compiles this module but uses only one fake.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use quicknotes_core::{
    new_v7, CreateNoteRequest, CreateUserRequest, Error, ListNotesRequest, Note, NotePage,
    NoteRepository, Result, SearchNotesRequest, User, UserRepository,
};

/// In-memory NoteRepository.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn window(mut matches: Vec<Note>, limit: i64, offset: i64) -> NotePage {
        matches.sort_by(|a, b| {
            b.created_at_utc
                .cmp(&a.created_at_utc)
                .then(b.id.cmp(&a.id))
        });
        let total = matches.len() as i64;
        let notes = matches
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        NotePage { notes, total }
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
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
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn list_owned(&self, req: ListNotesRequest) -> Result<NotePage> {
        let matches: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == req.user_id && n.archived == req.archived)
            .cloned()
            .collect();
        Ok(Self::window(matches, req.limit, req.offset))
    }

    async fn search_owned(&self, req: SearchNotesRequest) -> Result<NotePage> {
        let needle = req.query.to_lowercase();
        let matches: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| {
                n.user_id == req.user_id
                    && (req.include_archived || !n.archived)
                    && (n.title.to_lowercase().contains(&needle)
                        || n.content.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        Ok(Self::window(matches, req.limit, req.offset))
    }

    async fn update_content(&self, id: Uuid, title: &str, content: &str) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note not found with id: {}", id)))?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.updated_at_utc = Utc::now();
        Ok(())
    }

    async fn set_archived(&self, id: Uuid, archived: bool) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note not found with id: {}", id)))?;
        note.archived = archived;
        note.updated_at_utc = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(Error::NotFound(format!("Note not found with id: {}", id)));
        }
        Ok(())
    }
}

/// In-memory UserRepository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, req: CreateUserRequest) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        // Mirrors the unique index on lower(email)
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&req.email))
        {
            return Err(Error::BadRequest(
                "User with email already exists".to_string(),
            ));
        }
        let user = User {
            id: new_v7(),
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            created_at_utc: Utc::now(),
            updated_at_utc: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email)))
    }
}
