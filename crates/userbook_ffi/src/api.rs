//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the add/list/edit/delete screen actions to Dart via FRB.
//! - Open one connection per call and release it before returning.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures come back as envelopes with `ok=false`, never as panics.

use log::info;
use std::path::PathBuf;
use std::sync::OnceLock;
use userbook_core::db::{open_db_with, MigrationPolicy, OpenOptions};
use userbook_core::{
    core_version as core_version_inner, create_outcome, delete_existing_user,
    init_logging as init_logging_inner, ping as ping_inner, update_outcome, FormOutcome,
    SqliteUserRepository, UserService,
};

const DB_FILE_NAME: &str = "userbook.sqlite3";
const DB_PATH_ENV: &str = "USERBOOK_DB_PATH";
const DESTRUCTIVE_MIGRATIONS_ENV: &str = "USERBOOK_DESTRUCTIVE_MIGRATIONS";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static OPEN_OPTIONS: OnceLock<OpenOptions> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One row of the user list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Response envelope for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersListResponse {
    /// Whether the read succeeded.
    pub ok: bool,
    /// Rows in ascending id order; empty on failure.
    pub items: Vec<UserListItem>,
    /// Whether the empty-state message should be visible.
    pub show_empty_message: bool,
    /// Diagnostic message; empty on success.
    pub message: String,
}

/// Response envelope for add/edit/delete screen actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActionResponse {
    /// Whether the operation changed the store.
    pub ok: bool,
    /// Assigned id, set only by a successful create.
    pub user_id: Option<i64>,
    /// User-facing notice to show as a transient message.
    pub message: String,
    /// Whether the host should leave the current screen.
    pub close_screen: bool,
}

impl UserActionResponse {
    fn from_outcome(outcome: FormOutcome, user_id: Option<i64>) -> Self {
        Self {
            ok: outcome.close_screen,
            user_id,
            message: outcome.notice.to_string(),
            close_screen: outcome.close_screen,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            user_id: None,
            message: message.into(),
            close_screen: false,
        }
    }
}

/// Reads every stored user for the list screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn users_list() -> UsersListResponse {
    let result =
        with_user_service(|service| service.list_users().map_err(|err| err.to_string()));
    match result {
        Ok(users) => {
            let items = users
                .into_iter()
                .map(|user| UserListItem {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                    phone: user.phone,
                })
                .collect::<Vec<_>>();
            UsersListResponse {
                ok: true,
                show_empty_message: items.is_empty(),
                items,
                message: String::new(),
            }
        }
        Err(err) => UsersListResponse {
            ok: false,
            items: Vec::new(),
            show_empty_message: true,
            message: format!("users_list failed: {err}"),
        },
    }
}

/// Saves a new user from the add screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the assigned id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn user_create(name: String, email: String, phone: String) -> UserActionResponse {
    with_user_service(|service| {
        let result = service.create_user(name, email, phone);
        let outcome = create_outcome(&result);
        Ok(UserActionResponse::from_outcome(
            outcome,
            result.ok().map(|user| user.id),
        ))
    })
    .unwrap_or_else(UserActionResponse::failure)
}

/// Saves edited fields from the edit screen.
#[flutter_rust_bridge::frb(sync)]
pub fn user_update(id: i64, name: String, email: String, phone: String) -> UserActionResponse {
    with_user_service(|service| {
        let outcome = update_outcome(&service.update_user(id, name, email, phone));
        Ok(UserActionResponse::from_outcome(outcome, None))
    })
    .unwrap_or_else(UserActionResponse::failure)
}

/// Deletes one user by id, from either the edit screen or a confirmed list prompt.
///
/// `close_screen` refers to the edit screen; the list screen reloads instead.
#[flutter_rust_bridge::frb(sync)]
pub fn user_delete(id: i64) -> UserActionResponse {
    with_user_service(|service| {
        let outcome = delete_existing_user(service, id);
        Ok(UserActionResponse::from_outcome(outcome, None))
    })
    .unwrap_or_else(UserActionResponse::failure)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn resolve_open_options() -> OpenOptions {
    *OPEN_OPTIONS.get_or_init(|| {
        let destructive = std::env::var(DESTRUCTIVE_MIGRATIONS_ENV)
            .map(|raw| matches!(raw.trim(), "1" | "true"))
            .unwrap_or(false);
        if destructive {
            info!("event=open_options module=ffi status=ok migration_policy=destructive_reset");
        }
        OpenOptions {
            migration_policy: if destructive {
                MigrationPolicy::DestructiveReset
            } else {
                MigrationPolicy::Additive
            },
            ..OpenOptions::default()
        }
    })
}

fn with_user_service<T>(
    f: impl FnOnce(&UserService<SqliteUserRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let conn = open_db_with(resolve_db_path(), resolve_open_options())
        .map_err(|err| format!("user DB open failed: {err}"))?;
    let service = UserService::new(SqliteUserRepository::new(&conn));
    f(&service)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, user_create, user_delete, user_update, users_list,
    };
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn user_create_rejects_blank_fields_and_keeps_screen_open() {
        use_test_db();
        let response = user_create("Ana".to_string(), "  ".to_string(), "1".to_string());
        assert!(!response.ok);
        assert!(!response.close_screen);
        assert_eq!(response.user_id, None);
        assert_eq!(response.message, "Please fill in all fields.");
    }

    #[test]
    fn create_update_delete_flow_through_ffi() {
        use_test_db();
        let name = unique_token("ffi-user");
        let created = user_create(name.clone(), "ffi@x.com".to_string(), "555".to_string());
        assert!(created.ok, "{}", created.message);
        assert!(created.close_screen);
        let id = created.user_id.expect("create should return user_id");

        let listed = users_list();
        assert!(listed.ok, "{}", listed.message);
        assert!(listed.items.iter().any(|item| item.id == id && item.name == name));

        let updated = user_update(
            id,
            format!("{name}-renamed"),
            "ffi@y.com".to_string(),
            "556".to_string(),
        );
        assert!(updated.ok, "{}", updated.message);

        let conn = userbook_core::db::open_db(super::resolve_db_path()).expect("open db");
        let email: String = conn
            .query_row(
                "SELECT email FROM users WHERE id = ?1",
                rusqlite::params![id],
                |row| row.get(0),
            )
            .expect("query updated row");
        assert_eq!(email, "ffi@y.com");
        drop(conn);

        assert!(user_delete(id).ok);
        let second = user_delete(id);
        assert!(!second.ok);
        assert!(!second.close_screen);
    }

    #[test]
    fn user_update_on_missing_id_reports_failure() {
        use_test_db();
        let response = user_update(
            i64::MAX,
            "Ghost".to_string(),
            "g@x.com".to_string(),
            "0".to_string(),
        );
        assert!(!response.ok);
        assert_eq!(response.message, "Could not update the user.");
    }

    // Pins DB_PATH before any call resolves it from the environment.
    fn use_test_db() {
        static TEST_DB_DIR: OnceLock<tempfile::TempDir> = OnceLock::new();
        let dir = TEST_DB_DIR.get_or_init(|| tempfile::tempdir().expect("create test db dir"));
        let path = super::DB_PATH.get_or_init(|| dir.path().join(super::DB_FILE_NAME));
        assert!(path.starts_with(dir.path()), "test DB escaped its tempdir");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
