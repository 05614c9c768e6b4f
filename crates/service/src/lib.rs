//! Service layer providing the claim and user operations on top of `models`.
//! - Owns the JSON document store and the load/mutate/save discipline.
//! - Exposes repository traits so the HTTP layer never touches storage directly.

pub mod errors;
pub mod storage;
pub mod claims;
pub mod users;
pub mod seed;
#[cfg(test)]
pub mod test_support;
