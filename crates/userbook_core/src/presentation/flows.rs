//! Add, edit and list screen decisions without widgets.
//!
//! # Responsibility
//! - Turn form submissions into store calls and user-facing notices.
//! - Decide whether a screen closes (success) or stays open (failure).
//! - Route list row intents to navigation args or a delete confirmation.
//!
//! # Invariants
//! - Validation failures never reach the store.
//! - A screen closes only after a successful mutation.
//! - "No matching row" and "store error" produce the same failure notice.

use crate::model::edit_args::UserEditArgs;
use crate::model::user::{UserId, UserRecord};
use crate::presentation::user_list::UserListAdapter;
use crate::repo::user_repo::{RepoResult, UserRepository};
use crate::service::user_service::{UserService, UserServiceError};
use log::warn;
use std::sync::mpsc::{channel, Receiver};

pub const NOTICE_FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const NOTICE_USER_SAVED: &str = "User saved.";
pub const NOTICE_SAVE_FAILED: &str = "Could not save the user.";
pub const NOTICE_USER_UPDATED: &str = "User updated.";
pub const NOTICE_UPDATE_FAILED: &str = "Could not update the user.";
pub const NOTICE_USER_DELETED: &str = "User deleted.";
pub const NOTICE_DELETE_FAILED: &str = "Could not delete the user.";
pub const DELETE_PROMPT_TITLE: &str = "Delete user";

/// Result of a screen action as the host should present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    /// Transient message for the user.
    pub notice: &'static str,
    /// Whether the host should navigate away from the current screen.
    pub close_screen: bool,
}

impl FormOutcome {
    fn done(notice: &'static str) -> Self {
        Self {
            notice,
            close_screen: true,
        }
    }

    fn stay(notice: &'static str) -> Self {
        Self {
            notice,
            close_screen: false,
        }
    }
}

/// Saves a new user from the add form.
pub fn submit_new_user<R: UserRepository>(
    service: &UserService<R>,
    name: &str,
    email: &str,
    phone: &str,
) -> FormOutcome {
    create_outcome(&service.create_user(name, email, phone))
}

/// Maps a create result to the add form's outcome.
pub fn create_outcome(result: &Result<UserRecord, UserServiceError>) -> FormOutcome {
    match result {
        Ok(_) => FormOutcome::done(NOTICE_USER_SAVED),
        Err(UserServiceError::Validation(_)) => FormOutcome::stay(NOTICE_FILL_ALL_FIELDS),
        Err(UserServiceError::Repo(_)) => FormOutcome::stay(NOTICE_SAVE_FAILED),
    }
}

/// Maps an update result to the edit form's outcome; `Ok(0)` means the row is gone.
pub fn update_outcome(result: &Result<usize, UserServiceError>) -> FormOutcome {
    match result {
        Ok(affected) if *affected > 0 => FormOutcome::done(NOTICE_USER_UPDATED),
        Ok(_) | Err(UserServiceError::Repo(_)) => FormOutcome::stay(NOTICE_UPDATE_FAILED),
        Err(UserServiceError::Validation(_)) => FormOutcome::stay(NOTICE_FILL_ALL_FIELDS),
    }
}

/// Deletes `id` without confirmation; closes the screen only when a row went away.
pub fn delete_existing_user<R: UserRepository>(
    service: &UserService<R>,
    id: UserId,
) -> FormOutcome {
    if delete_succeeded(service, id) {
        FormOutcome::done(NOTICE_USER_DELETED)
    } else {
        FormOutcome::stay(NOTICE_DELETE_FAILED)
    }
}

/// Edit screen state seeded from the selected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUserForm {
    args: UserEditArgs,
}

impl EditUserForm {
    pub fn new(args: UserEditArgs) -> Self {
        Self { args }
    }

    /// Initial field values to pre-fill the form with.
    pub fn initial(&self) -> &UserEditArgs {
        &self.args
    }

    /// Validates and stores edited fields for the bound user.
    pub fn update<R: UserRepository>(
        &self,
        service: &UserService<R>,
        name: &str,
        email: &str,
        phone: &str,
    ) -> FormOutcome {
        update_outcome(&service.update_user(self.args.id, name, email, phone))
    }

    /// Deletes the bound user immediately, without confirmation.
    pub fn delete<R: UserRepository>(&self, service: &UserService<R>) -> FormOutcome {
        delete_existing_user(service, self.args.id)
    }
}

/// Confirmation the host shows before deleting from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub user: UserRecord,
    pub title: &'static str,
    pub message: String,
}

impl DeletePrompt {
    fn for_user(user: &UserRecord) -> Self {
        Self {
            user: user.clone(),
            title: DELETE_PROMPT_TITLE,
            message: format!("Are you sure you want to delete {}?", user.name),
        }
    }
}

/// Row interaction forwarded from the adapter to the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    /// Navigate to the edit screen with these args.
    Edit(UserEditArgs),
    /// Ask the user to confirm deletion.
    ConfirmDelete(DeletePrompt),
}

/// Visible list state after a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    pub item_count: usize,
    pub show_empty_message: bool,
}

/// List screen controller owning the row adapter.
#[derive(Debug)]
pub struct UsersListScreen {
    adapter: UserListAdapter,
    intents: Receiver<ListIntent>,
}

impl UsersListScreen {
    /// Creates an empty list whose row callbacks queue `ListIntent`s.
    pub fn new() -> Self {
        let (select_tx, intents) = channel();
        let delete_tx = select_tx.clone();
        let adapter = UserListAdapter::new(
            Vec::new(),
            move |user| {
                let _ = select_tx.send(ListIntent::Edit(UserEditArgs::from(user)));
            },
            move |user| {
                let _ = delete_tx.send(ListIntent::ConfirmDelete(DeletePrompt::for_user(user)));
            },
        );
        Self { adapter, intents }
    }

    pub fn adapter(&self) -> &UserListAdapter {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut UserListAdapter {
        &mut self.adapter
    }

    /// Re-reads all users into the adapter.
    pub fn reload<R: UserRepository>(
        &mut self,
        service: &UserService<R>,
    ) -> RepoResult<ListState> {
        let users = service.list_users()?;
        self.adapter.replace(users);
        Ok(self.state())
    }

    pub fn state(&self) -> ListState {
        ListState {
            item_count: self.adapter.item_count(),
            show_empty_message: self.adapter.is_empty(),
        }
    }

    /// Pops the oldest pending row intent.
    pub fn next_intent(&self) -> Option<ListIntent> {
        self.intents.try_recv().ok()
    }

    /// Deletes the prompted user and reloads the list on success.
    pub fn confirm_delete<R: UserRepository>(
        &mut self,
        service: &UserService<R>,
        prompt: &DeletePrompt,
    ) -> FormOutcome {
        if !delete_succeeded(service, prompt.user.id) {
            return FormOutcome::stay(NOTICE_DELETE_FAILED);
        }

        if let Err(err) = self.reload(service) {
            warn!("event=list_reload module=presentation status=error error={err}");
        }
        FormOutcome::stay(NOTICE_USER_DELETED)
    }
}

impl Default for UsersListScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn delete_succeeded<R: UserRepository>(service: &UserService<R>, id: UserId) -> bool {
    matches!(service.delete_user(id), Ok(affected) if affected > 0)
}
