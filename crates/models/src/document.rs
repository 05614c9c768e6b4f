use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{claim::Claim, user::User};

/// The whole persisted state. Either collection may be absent on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Top-level keys other than `claims` and `users`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn claim_index(&self, id: &str) -> Option<usize> {
        self.claims.iter().position(|c| c.id == id)
    }

    pub fn user_index(&self, username: &str) -> Option<usize> {
        self.users.iter().position(|u| u.username == username)
    }

    pub fn has_claim(&self, id: &str) -> bool {
        self.claim_index(id).is_some()
    }
}
