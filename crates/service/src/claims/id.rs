use chrono::Utc;
use rand::Rng;

/// `CLAIM-<unix millis>-<4 digit random suffix>`
pub fn generate_claim_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("CLAIM-{}-{:04}", Utc::now().timestamp_millis(), suffix)
}

/// Generate ids until one is not taken according to `taken`.
pub fn generate_unique_claim_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_claim_id();
        if !taken(&id) {
            return id;
        }
    }
}
