//! Row adapter binding a user snapshot to interactive list rows.
//!
//! # Responsibility
//! - Hold the currently displayed sequence of users.
//! - Build row handles that expose display text and two triggers.
//! - Tell the rendering surface when every row is stale.
//!
//! # Invariants
//! - `item_count()` always equals the length of the held snapshot.
//! - `replace` swaps the whole snapshot in one assignment; readers holding
//!   `snapshot()` keep seeing the previous sequence, never a mix.
//! - Long press always reports the input as handled.

use crate::model::user::UserRecord;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Callback receiving the record behind a row interaction.
pub type UserCallback = Arc<dyn Fn(&UserRecord) + Send + Sync>;

/// Listener notified after the displayed data changes.
pub type ListChangeListener = Box<dyn Fn(ListChange) + Send + Sync>;

/// Change signal sent to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// All rows are stale and must be redrawn.
    DataSetChanged { item_count: usize },
}

/// Input modality delivered to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowInput {
    /// Primary action, mapped to "select".
    Tap,
    /// Secondary action, mapped to "delete intent".
    LongPress,
}

/// Adapter from a user snapshot to list rows.
pub struct UserListAdapter {
    users: Arc<[UserRecord]>,
    on_select: UserCallback,
    on_delete_intent: UserCallback,
    change_listener: Option<ListChangeListener>,
}

impl UserListAdapter {
    /// Creates an adapter over `users` with its two row callbacks.
    pub fn new(
        users: Vec<UserRecord>,
        on_select: impl Fn(&UserRecord) + Send + Sync + 'static,
        on_delete_intent: impl Fn(&UserRecord) + Send + Sync + 'static,
    ) -> Self {
        Self {
            users: users.into(),
            on_select: Arc::new(on_select),
            on_delete_intent: Arc::new(on_delete_intent),
            change_listener: None,
        }
    }

    /// Registers the rendering surface's change listener, replacing any previous one.
    pub fn set_change_listener(
        &mut self,
        listener: impl Fn(ListChange) + Send + Sync + 'static,
    ) {
        self.change_listener = Some(Box::new(listener));
    }

    /// Replaces the entire displayed sequence and marks every row stale.
    ///
    /// No diffing is performed.
    pub fn replace(&mut self, users: Vec<UserRecord>) {
        self.users = users.into();
        let item_count = self.users.len();
        debug!("event=list_replace module=presentation item_count={item_count}");

        if let Some(listener) = &self.change_listener {
            listener(ListChange::DataSetChanged { item_count });
        }
    }

    /// Number of rows; equals the held sequence length.
    pub fn item_count(&self) -> usize {
        self.users.len()
    }

    /// Empty-state indicator for the host screen.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Shared handle to the sequence a render pass should read.
    pub fn snapshot(&self) -> Arc<[UserRecord]> {
        Arc::clone(&self.users)
    }

    /// Binds the row at `position`, or `None` when out of range.
    pub fn bind(&self, position: usize) -> Option<UserRow> {
        if position >= self.users.len() {
            return None;
        }

        Some(UserRow {
            snapshot: self.snapshot(),
            position,
            on_select: Arc::clone(&self.on_select),
            on_delete_intent: Arc::clone(&self.on_delete_intent),
        })
    }
}

impl Debug for UserListAdapter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListAdapter")
            .field("item_count", &self.users.len())
            .field("has_change_listener", &self.change_listener.is_some())
            .finish()
    }
}

/// Presentational handle for one visible row.
pub struct UserRow {
    snapshot: Arc<[UserRecord]>,
    position: usize,
    on_select: UserCallback,
    on_delete_intent: UserCallback,
}

impl UserRow {
    /// Record displayed by this row.
    pub fn user(&self) -> &UserRecord {
        &self.snapshot[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.user().name
    }

    pub fn email(&self) -> &str {
        &self.user().email
    }

    pub fn phone(&self) -> &str {
        &self.user().phone
    }

    /// Primary trigger: forwards the record to the select callback.
    pub fn tap(&self) {
        (self.on_select)(self.user());
    }

    /// Secondary trigger: forwards the record to the delete-intent callback.
    ///
    /// Always returns `true` so the host skips any default long-press behavior.
    pub fn long_press(&self) -> bool {
        (self.on_delete_intent)(self.user());
        true
    }

    /// Dispatches `input` to the matching trigger; returns whether it was handled.
    pub fn handle(&self, input: RowInput) -> bool {
        match input {
            RowInput::Tap => {
                self.tap();
                true
            }
            RowInput::LongPress => self.long_press(),
        }
    }
}

impl Debug for UserRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRow")
            .field("position", &self.position)
            .field("user_id", &self.user().id)
            .finish()
    }
}
