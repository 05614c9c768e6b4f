use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Status every claim starts in.
pub const DEFAULT_STATUS: &str = "Submitted";

/// Claimant contact details. All fields are free text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Keys this service does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Incident details. `date_of_incident` is an ISO date string (`YYYY-MM-DD`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimDetails {
    pub policy_number: String,
    pub claim_type: String,
    pub date_of_incident: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A filed claim as stored in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_info: ClientInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub claim_details: ClaimDetails,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> String { DEFAULT_STATUS.to_string() }

/// Treats an explicit `null` like an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Claim {
    /// New claim in the initial status.
    pub fn submitted(id: String, client_info: ClientInfo, claim_details: ClaimDetails) -> Self {
        Self { id, client_info, claim_details, status: default_status(), extra: Map::new() }
    }

    /// Case-insensitive substring match on id, first name and last name.
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.id.to_lowercase().contains(needle_lower)
            || self.client_info.first_name.to_lowercase().contains(needle_lower)
            || self.client_info.last_name.to_lowercase().contains(needle_lower)
    }
}
