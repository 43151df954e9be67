//! Core logic for UserBook, a local contact list.
//! This crate owns the `users` store and the widget-free screen logic.

pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use db::{DbError, MigrationPolicy, OpenOptions};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::edit_args::UserEditArgs;
pub use model::user::{UserField, UserId, UserRecord, UserValidationError, UNSAVED_USER_ID};
pub use presentation::flows::{
    create_outcome, delete_existing_user, submit_new_user, update_outcome, DeletePrompt,
    EditUserForm, FormOutcome, ListIntent, ListState, UsersListScreen,
};
pub use presentation::user_list::{ListChange, RowInput, UserListAdapter, UserRow};
pub use repo::user_repo::{RepoError, RepoResult, SqliteUserRepository, UserRepository};
pub use service::user_service::{UserService, UserServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
