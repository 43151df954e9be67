//! Widget-free presentation logic for the user screens.
//!
//! # Responsibility
//! - Map an ordered record snapshot to interactive rows (`user_list`).
//! - Drive add/edit/list screen decisions and notices (`flows`).
//!
//! # Invariants
//! - Nothing here performs I/O except through `UserService`.
//! - Rendering, navigation and toast display stay with the host UI.

pub mod flows;
pub mod user_list;
