//! Users: account inputs, repository abstraction and the JSON-file implementation.

pub mod domain;
pub mod repository;
pub mod repo;

pub use repo::json_file::JsonUserRepository;
pub use repository::UserRepository;
