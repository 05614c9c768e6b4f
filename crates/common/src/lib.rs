pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn success_ack_serializes_flag() {
        let v = serde_json::to_value(types::SuccessAck::ok()).unwrap();
        assert_eq!(v, serde_json::json!({"success": true}));
    }
}
