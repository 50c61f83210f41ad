//! Branch records.

use ledgerline_core::{BranchId, HasId};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// A branch office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(rename = "_id")]
    pub id: BranchId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<UserRef>,
}

impl HasId for Branch {
    type Id = BranchId;

    fn id(&self) -> &BranchId {
        &self.id
    }
}

/// Payload for creating a branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBranch {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
}
