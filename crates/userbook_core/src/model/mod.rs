//! Domain model for locally stored user contacts.
//!
//! # Responsibility
//! - Define the canonical `UserRecord` shared by store and presentation.
//! - Define the typed DTO handed from the list screen to the edit screen.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; persisted ids are positive.
//! - Deletion is a hard delete; there are no tombstones.

pub mod edit_args;
pub mod user;
