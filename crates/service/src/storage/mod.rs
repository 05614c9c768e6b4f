//! Storage abstractions for service layer
//!
//! The single JSON document holding every collection, with serialized
//! load/mutate/save access.

pub mod json_document_store;

pub use json_document_store::JsonDocumentStore;
