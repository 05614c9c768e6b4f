//! Sample data written on first boot.

use models::{Claim, ClaimDetails, ClientInfo, Role, User};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::JsonDocumentStore;

/// How many records each collection received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub claims: usize,
    pub users: usize,
}

fn claim(
    id: &str,
    (first_name, last_name, email, phone): (&str, &str, &str, &str),
    (policy_number, claim_type, date_of_incident, description): (&str, &str, &str, &str),
) -> Claim {
    Claim::submitted(
        id.to_string(),
        ClientInfo {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Default::default()
        },
        ClaimDetails {
            policy_number: policy_number.into(),
            claim_type: claim_type.into(),
            date_of_incident: date_of_incident.into(),
            description: description.into(),
            ..Default::default()
        },
    )
}

pub fn sample_claims() -> Vec<Claim> {
    vec![
        claim(
            "CLAIM-1678886400001",
            ("John", "Doe", "john.doe@example.com", "123-456-7890"),
            ("POL-98765", "Auto", "2023-03-15", "Minor fender bender in the parking lot."),
        ),
        claim(
            "CLAIM-1678886400002",
            ("Jane", "Smith", "jane.smith@example.com", "234-567-8901"),
            ("POL-12345", "Home", "2023-04-10", "Water damage in basement."),
        ),
        claim(
            "CLAIM-1678886400003",
            ("Alice", "Brown", "alice.brown@example.com", "345-678-9012"),
            ("POL-54321", "Health", "2023-05-05", "Hospitalization for surgery."),
        ),
        claim(
            "CLAIM-1678886400004",
            ("Bob", "Lee", "bob.lee@example.com", "456-789-0123"),
            ("POL-67890", "Auto", "2023-06-20", "Windshield replacement."),
        ),
        claim(
            "CLAIM-1678886400005",
            ("Carol", "White", "carol.white@example.com", "567-890-1234"),
            ("POL-11223", "Home", "2023-07-12", "Fire damage in kitchen."),
        ),
    ]
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("vipin", "admin123", Role::Admin),
        User::new("rahul", "user123", Role::User),
    ]
}

/// Fill each collection with sample data if, and only if, it is empty.
pub async fn seed_if_empty(store: &JsonDocumentStore) -> Result<SeedReport, ServiceError> {
    let needed = store
        .read("seed.check", |doc| doc.claims.is_empty() || doc.users.is_empty())
        .await?;
    if !needed {
        return Ok(SeedReport::default());
    }
    let report = store
        .transact("seed.apply", |doc| {
            let mut report = SeedReport::default();
            if doc.claims.is_empty() {
                doc.claims = sample_claims();
                report.claims = doc.claims.len();
            }
            if doc.users.is_empty() {
                doc.users = sample_users();
                report.users = doc.users.len();
            }
            Ok(report)
        })
        .await?;
    info!(claims = report.claims, users = report.users, "seed data applied");
    Ok(report)
}
