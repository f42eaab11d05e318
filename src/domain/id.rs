//! Identifier generation: unix millis followed by nine random base36 chars.
//! Collisions are possible in principle, only unlikely.

use rand::Rng;

const SUFFIX_LEN: usize = 9;

pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .filter_map(|_| std::char::from_digit(rng.gen_range(0..36), 36))
        .collect();
    format!("{millis}{suffix}")
}
