//! Lightweight user record, as embedded in branch and sale references.

use ledgerline_core::{HasId, Ref, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// A user as expanded inside another record (branch manager, sale owner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl HasId for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Reference to a user, bare id or embedded record.
pub type UserRef = Ref<UserId, User>;
