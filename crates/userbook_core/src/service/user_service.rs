//! User use-case service.
//!
//! # Responsibility
//! - Validate form input before it reaches the repository.
//! - Provide create/list/get/update/delete entry points for core callers.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - No repository write happens for input that fails validation.
//! - Field values never appear in log lines; ids and counts only.
//! - Service layer remains storage-agnostic.

use crate::model::user::{UserId, UserRecord, UserValidationError};
use crate::repo::user_repo::{RepoError, RepoResult, UserRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for user use-cases.
#[derive(Debug)]
pub enum UserServiceError {
    /// Input rejected before any store call.
    Validation(UserValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<UserValidationError> for UserServiceError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for UserServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and inserts a new user.
    ///
    /// # Contract
    /// - Input is trimmed; blank fields fail with `Validation`.
    /// - Returns the stored record carrying its assigned id.
    pub fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<UserRecord, UserServiceError> {
        let mut user = UserRecord::new(name, email, phone);
        user.validate()?;

        match self.repo.create_user(&user) {
            Ok(id) => {
                info!("event=user_create module=service status=ok user_id={id}");
                user.id = id;
                Ok(user)
            }
            Err(err) => {
                warn!("event=user_create module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Lists all users in ascending id order.
    pub fn list_users(&self) -> RepoResult<Vec<UserRecord>> {
        self.repo.list_users()
    }

    /// Gets one user by id.
    pub fn get_user(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        self.repo.get_user(id)
    }

    /// Validates and rewrites name/email/phone of an existing user.
    ///
    /// Returns the affected row count: `1` when `id` matched, `0` otherwise.
    pub fn update_user(
        &self,
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<usize, UserServiceError> {
        let user = UserRecord::with_id(id, name, email, phone);
        user.validate()?;

        match self.repo.update_user(&user) {
            Ok(affected) => {
                info!(
                    "event=user_update module=service status=ok user_id={id} affected={affected}"
                );
                Ok(affected)
            }
            Err(err) => {
                warn!("event=user_update module=service status=error user_id={id} error={err}");
                Err(err.into())
            }
        }
    }

    /// Deletes one user by id.
    ///
    /// Returns `0` when no row matched; deleting twice is not an error.
    pub fn delete_user(&self, id: UserId) -> RepoResult<usize> {
        match self.repo.delete_user(id) {
            Ok(affected) => {
                info!(
                    "event=user_delete module=service status=ok user_id={id} affected={affected}"
                );
                Ok(affected)
            }
            Err(err) => {
                warn!("event=user_delete module=service status=error user_id={id} error={err}");
                Err(err)
            }
        }
    }
}
