//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/presentation code.
//!
//! # Invariants
//! - Mutations report affected row counts; "no match" is not an error.

pub mod user_repo;
