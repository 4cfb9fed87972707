//! # quicknotes-service
//!
//! Service layer for quicknotes: ownership enforcement, pagination window
//! computation, and the email-uniqueness invariant, on top of the
//! repository traits from `quicknotes-core`.
//!
//! Transports (HTTP, CLI) sit above this crate; stores sit below it behind
//! [`quicknotes_core::NoteRepository`] and [`quicknotes_core::UserRepository`].

pub mod note_service;
pub mod user_service;

pub use note_service::NoteService;
pub use user_service::UserService;
