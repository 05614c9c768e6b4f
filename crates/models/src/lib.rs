//! Persisted data shapes: claims, users and the document that holds both.

pub mod errors;
pub mod claim;
pub mod user;
pub mod document;

pub use claim::{Claim, ClaimDetails, ClientInfo};
pub use document::Document;
pub use user::{Role, User};
