use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Acknowledgement body returned by delete/create endpoints that carry no payload.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessAck {
    pub success: bool,
}

impl SuccessAck {
    pub fn ok() -> Self { Self { success: true } }
}
