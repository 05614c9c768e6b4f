//! Claims: domain inputs, repository abstraction and the JSON-file implementation.

pub mod domain;
pub mod id;
pub mod repository;
pub mod repo;

pub use repo::json_file::JsonClaimRepository;
pub use repository::ClaimRepository;
