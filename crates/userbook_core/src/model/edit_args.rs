//! Typed hand-off from the user list to the edit screen.

use crate::model::user::{UserId, UserRecord};
use serde::{Deserialize, Serialize};

/// Fields of the selected record passed across a screen transition.
///
/// Serialized keys are `id`, `name`, `email` and `phone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEditArgs {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&UserRecord> for UserEditArgs {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl From<UserEditArgs> for UserRecord {
    fn from(args: UserEditArgs) -> Self {
        UserRecord::with_id(args.id, args.name, args.email, args.phone)
    }
}
