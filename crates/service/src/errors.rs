use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized => 1004,
            ServiceError::Storage(_) => 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let all = [
            ServiceError::Validation("x".into()),
            ServiceError::Conflict("x".into()),
            ServiceError::not_found("claim"),
            ServiceError::Unauthorized,
            ServiceError::storage("disk full"),
        ];
        let mut codes: Vec<u16> = all.iter().map(ServiceError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn model_validation_becomes_validation() {
        let e: ServiceError = ModelError::Validation("bad role".into()).into();
        assert!(matches!(e, ServiceError::Validation(m) if m == "bad role"));
    }

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("Claim").to_string(), "not found: Claim not found");
    }
}
