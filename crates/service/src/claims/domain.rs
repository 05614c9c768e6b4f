use models::claim::null_as_default;
use models::{Claim, ClaimDetails, ClientInfo};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// Create payload. Any `id` or `status` the client sends is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaimInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_info: ClientInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub claim_details: ClaimDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetailsPatch {
    pub policy_number: Option<String>,
    pub claim_type: Option<String>,
    pub date_of_incident: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update. Absent fields keep their stored value and unknown keys are
/// merged into the stored record. `id` is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPatch {
    pub client_info: Option<ClientInfoPatch>,
    pub claim_details: Option<ClaimDetailsPatch>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn set_if_some(slot: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl ClientInfoPatch {
    pub fn apply_to(self, info: &mut ClientInfo) {
        set_if_some(&mut info.first_name, self.first_name);
        set_if_some(&mut info.last_name, self.last_name);
        set_if_some(&mut info.email, self.email);
        set_if_some(&mut info.phone, self.phone);
        info.extra.extend(self.extra);
    }
}

impl ClaimDetailsPatch {
    pub fn apply_to(self, details: &mut ClaimDetails) {
        set_if_some(&mut details.policy_number, self.policy_number);
        set_if_some(&mut details.claim_type, self.claim_type);
        set_if_some(&mut details.date_of_incident, self.date_of_incident);
        set_if_some(&mut details.description, self.description);
        details.extra.extend(self.extra);
    }
}

impl ClaimPatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if matches!(&self.status, Some(s) if s.trim().is_empty()) {
            return Err(ServiceError::Validation("status must not be blank".into()));
        }
        Ok(())
    }

    pub fn apply_to(self, claim: &mut Claim) {
        if let Some(p) = self.client_info {
            p.apply_to(&mut claim.client_info);
        }
        if let Some(p) = self.claim_details {
            p.apply_to(&mut claim.claim_details);
        }
        if let Some(s) = self.status {
            claim.status = s;
        }
        claim.extra.extend(self.extra.into_iter().filter(|(k, _)| k != "id"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> Claim {
        Claim::submitted(
            "CLAIM-1".into(),
            ClientInfo {
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john.doe@example.com".into(),
                phone: "123-456-7890".into(),
                ..Default::default()
            },
            ClaimDetails {
                policy_number: "POL-98765".into(),
                claim_type: "Auto".into(),
                date_of_incident: "2023-03-15".into(),
                description: "Minor fender bender in the parking lot.".into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn patch_only_touches_supplied_fields() -> anyhow::Result<()> {
        let patch: ClaimPatch = serde_json::from_value(json!({
            "claimDetails": { "description": "Rear bumper replaced." }
        }))?;
        let mut claim = stored();
        patch.apply_to(&mut claim);
        assert_eq!(claim.claim_details.description, "Rear bumper replaced.");
        assert_eq!(claim.claim_details.policy_number, "POL-98765");
        assert_eq!(claim.client_info, stored().client_info);
        assert_eq!(claim.status, "Submitted");
        Ok(())
    }

    #[test]
    fn patch_merges_unknown_keys_but_never_the_id() -> anyhow::Result<()> {
        let mut claim = stored();
        claim.extra.insert("notes".into(), json!("keep"));
        claim.extra.insert("priority".into(), json!(1));
        let patch: ClaimPatch = serde_json::from_value(json!({
            "id": "HIJACK",
            "priority": 2,
            "clientInfo": { "middle": "Q" }
        }))?;
        patch.apply_to(&mut claim);
        assert_eq!(claim.id, "CLAIM-1");
        assert!(!claim.extra.contains_key("id"));
        assert_eq!(claim.extra["notes"], "keep");
        assert_eq!(claim.extra["priority"], 2);
        assert_eq!(claim.client_info.extra["middle"], "Q");
        assert_eq!(claim.client_info.first_name, "John");
        Ok(())
    }

    #[test]
    fn create_payload_accepts_null_sections() -> anyhow::Result<()> {
        let input: NewClaimInput = serde_json::from_value(json!({ "clientInfo": null, "claimDetails": null }))?;
        assert_eq!(input.client_info, ClientInfo::default());
        assert_eq!(input.claim_details, ClaimDetails::default());
        Ok(())
    }

    #[test]
    fn create_payload_ignores_id_and_status() -> anyhow::Result<()> {
        let input: NewClaimInput = serde_json::from_value(json!({
            "id": "client-chosen",
            "status": "Approved",
            "clientInfo": { "firstName": "Ann" }
        }))?;
        assert_eq!(input.client_info.first_name, "Ann");
        assert_eq!(input.claim_details, ClaimDetails::default());
        Ok(())
    }

    #[test]
    fn blank_status_rejected() {
        let patch = ClaimPatch { status: Some("  ".into()), ..Default::default() };
        assert!(matches!(patch.validate(), Err(ServiceError::Validation(_))));
        assert!(ClaimPatch::default().validate().is_ok());
    }
}
