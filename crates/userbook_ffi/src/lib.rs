//! Flutter bridge crate for UserBook.

pub mod api;
